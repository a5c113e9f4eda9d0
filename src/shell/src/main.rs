use anyhow::{Context, Result};
use dietcap_ui::{
    Shell,
    config::AppConfig,
    http_client::{HttpTransport, ReqwestTransport},
    input::{self, Command, HELP},
    render::render,
    session_storage::{FileSessionStorage, MemorySessionStorage, SessionStorage},
};
use dietcap_ui_core::Event;
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::get().context("failed to load configuration")?;
    let transport = ReqwestTransport::new(&config.api.url, config.api.timeout)?;

    info!("api: {}", config.api.url);

    match &config.session.file {
        Some(path) => {
            info!("session file: {path:?}");
            repl(Shell::new(FileSessionStorage::new(path), transport), config).await
        }
        None => {
            info!("session kept in memory");
            repl(Shell::new(MemorySessionStorage::default(), transport), config).await
        }
    }
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}

async fn repl<S, T>(mut shell: Shell<S, T>, config: &AppConfig) -> Result<()>
where
    S: SessionStorage,
    T: HttpTransport,
{
    shell
        .dispatch(Event::Initialize {
            path: config.start_path.clone(),
        })
        .await?;
    print_view(&shell);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        match input::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Dispatch(events))) => {
                let renders = shell.renders();
                for event in events {
                    shell.dispatch(event).await?;
                }
                if shell.renders() != renders {
                    print_view(&shell);
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    info!("bye");
    Ok(())
}

fn print_view<S, T>(shell: &Shell<S, T>)
where
    S: SessionStorage,
    T: HttpTransport,
{
    print!("{}", render(&shell.view()));
}
