//! kaimono-cli - 買い物リストの端末フロントエンド
//!
//! これは collaborator レイヤーです。行を intent に変換して controller に
//! dispatch し、スナップショットを描画し直すだけで、ポリシーはすべて
//! kaimono-core 側にあります。

use kaimono_core::app::{Intent, ListController};
use kaimono_core::domain::ListSnapshot;
use kaimono_core::impls::FileKvStore;
use kaimono_core::ports::{SystemClock, UlidGenerator};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// 行を intent（または CLI コマンド）に解釈する
enum Command {
    Intent(Intent),
    List,
    Help,
    Quit,
    Unknown(String),
}

fn parse(line: &str, snapshot: &ListSnapshot) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "add" => Command::Intent(Intent::Add {
            label: rest.to_string(),
        }),
        "done" | "rm" => {
            // 番号は直前に描画した一覧の行番号（1 始まり）
            let id = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| snapshot.items().get(i))
                .map(|item| item.id);
            match id {
                Some(id) if verb == "done" => Command::Intent(Intent::Toggle { id }),
                Some(id) => Command::Intent(Intent::Delete { id }),
                None => Command::Unknown(format!("no item number {rest:?}")),
            }
        }
        "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "" => Command::List,
        other => Command::Unknown(format!("unknown command {other:?} (try `help`)")),
    }
}

fn render(snapshot: &ListSnapshot) {
    if snapshot.is_empty() {
        println!("(empty list -- `add <label>` to get started)");
        return;
    }
    for (n, item) in snapshot.iter().enumerate() {
        let mark = if item.is_done() { "x" } else { " " };
        println!("{:>3}. [{mark}] {}", n + 1, item.label);
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <label>   append an item");
    println!("  done <n>      check item n off");
    println!("  rm <n>        delete item n");
    println!("  ls            show the list");
    println!("  quit          leave (the list is already saved)");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| ".kaimono".into());
    let store = FileKvStore::new(data_dir);
    let ids = UlidGenerator::new(SystemClock);
    let mut controller = ListController::new(store, ids);

    if let Err(e) = controller.initialize().await {
        // 保存データが壊れている。勝手に上書きせず、ユーザーに任せる
        eprintln!("error: {e}");
        eprintln!("the stored list could not be read; fix or remove it and try again");
        std::process::exit(1);
    }

    render(controller.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await.ok();
        stdout.flush().await.ok();

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };

        match parse(&line, controller.snapshot()) {
            Command::Intent(intent) => {
                if let Err(e) = controller.dispatch(intent).await {
                    // 変更はメモリに残っている。次の操作で再保存される
                    eprintln!("warning: {e}");
                    eprintln!("the change may not have been saved");
                }
                render(controller.snapshot());
            }
            Command::List => render(controller.snapshot()),
            Command::Help => print_help(),
            Command::Unknown(msg) => println!("{msg}"),
            Command::Quit => break,
        }
    }
}
