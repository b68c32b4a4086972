use clap::Parser;
use experience_setup::utils::interrupt::{until_interrupted, InterruptListener};
use experience_setup::utils::{logger, terminal};
use experience_setup::{default_config_path, JsonFileStore, SetupArgs, SetupEngine, SetupError};
use std::io;

#[tokio::main]
async fn main() {
    let _args = SetupArgs::parse();

    // 初始化日誌
    logger::init_cli_logger();

    // 先註冊中斷監聽，再開始提示
    let mut interrupt = match InterruptListener::install() {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to install interrupt handler: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let config_path = default_config_path();
    let clear_screen = terminal::stdout_is_terminal();
    tracing::info!("Experience config target: {}", config_path.display());

    // 提示會阻塞在 stdin，放到 blocking 執行緒上
    let session = tokio::task::spawn_blocking(move || {
        let engine =
            SetupEngine::new(JsonFileStore::new(config_path)).with_clear_screen(clear_screen);
        engine.run(io::stdin().lock(), io::stdout())
    });

    let session = async {
        session
            .await
            .unwrap_or_else(|e| Err(SetupError::TerminalError(io::Error::other(e))))
    };
    let outcome = until_interrupted(session, interrupt.recv()).await;

    match outcome {
        Ok(path) => {
            tracing::info!("✅ Setup completed, config at {}", path.display());
            println!("✅ Setup completed successfully!");
            println!("The application will start automatically...");
        }
        Err(SetupError::Cancelled) => {
            tracing::info!("Setup cancelled by operator");
            println!("\n\n❌ Setup cancelled by user.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Setup failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            println!("❌ Setup failed. Please try again.");
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
