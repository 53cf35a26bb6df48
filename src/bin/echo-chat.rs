use clap::Parser;
use echo_bot::{
    client::{
        EchoClient,
        command::Input,
        session::{ChatSession, Role},
    },
    config::ClientConfig,
    telemetry,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::parse();
    telemetry::init_tracing(&format!("echo_bot={}", config.log_level));

    let client = EchoClient::new(config.url);
    let mut session = ChatSession::new();

    println!("Echo bot at {}  (/reset, /dialog, /exit)", client.base_url());
    println!("dialog {}", session.dialog_id());
    for turn in session.transcript() {
        println!("{}: {}", turn.role, turn.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = match Input::parse(&line) {
            Input::Blank => continue,
            Input::Exit => break,
            Input::ShowDialog => {
                println!("dialog {}", session.dialog_id());
                continue;
            }
            Input::Reset => {
                session.reset();
                println!("dialog {}", session.dialog_id());
                println!("{}: {}", Role::Assistant, session.transcript()[0].content);
                continue;
            }
            Input::Say(text) => text,
        };

        session.push(Role::User, text);
        match client.send_turn(&mut session).await {
            Ok(reply) => println!("{}: {}", Role::Assistant, reply),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}
