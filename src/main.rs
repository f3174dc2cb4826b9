use clap::Parser;
use serde::Serialize;
use shapesense::config::cli::{CatalogCommand, Cli, Command, FavoriteCommand};
use shapesense::core::catalog;
use shapesense::domain::model::{FormulaRecord, UserInfo, UserPatch};
use shapesense::domain::ports::ConfigProvider;
use shapesense::utils::error::ErrorSeverity;
use shapesense::utils::{logger, validation::Validate};
use shapesense::{
    FormulaAdvisor, HairstyleStore, LocalStorage, Result, ShapeError, TomlConfig, UserStore,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match TomlConfig::from_optional_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Some(storage) = &cli.storage {
        config.storage.path = storage.clone();
        tracing::debug!("🔧 Storage path overridden to: {}", storage);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli, config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: Cli, config: TomlConfig) -> Result<()> {
    let storage = LocalStorage::new(config.storage_path().to_string());
    let json = cli.json;

    match cli.command {
        Command::Target(args) => {
            let advisor = FormulaAdvisor::new(storage, config);
            let (hex, target) = advisor.resolve_target(&args.target_spec())?;
            if json {
                print_json(&serde_json::json!({ "hex": hex, "target": target }))?;
            } else {
                println!("🎨 {}", hex);
                println!("   度数: {}", target.target_level);
                println!("   色调: {}", target.target_reflect);
            }
        }
        Command::Formula(args) => {
            let hair = args.hair(config.default_hair());
            let mut config = config;
            if args.no_history {
                config.analysis.record_history = false;
            }
            let advisor = FormulaAdvisor::new(storage, config);
            let record = advisor.analyze(hair, &args.target_spec()).await?;
            if json {
                print_json(&record)?;
            } else {
                print_record(&record);
            }
        }
        Command::Catalog { kind } => match kind {
            CatalogCommand::Styles => {
                let styles = catalog::all_hairstyles();
                if json {
                    print_json(&styles)?;
                } else {
                    for style in styles {
                        println!("{:>3}  {}", style.id, style.name);
                    }
                }
            }
            CatalogCommand::Colors => {
                let colors = catalog::all_haircolors();
                if json {
                    print_json(&colors)?;
                } else {
                    for color in colors {
                        let target = shapesense::get_target_color(&color.color)?;
                        println!(
                            "{:>3}  {}  {}  (level {}, {})",
                            color.id,
                            color.name,
                            color.color,
                            target.target_level,
                            target.target_reflect
                        );
                    }
                }
            }
        },
        Command::Login(args) => {
            let store = UserStore::new(storage);
            let mut user = UserInfo::new(args.nickname);
            user.phone = args.phone;
            user.gender = args.gender;
            let token = args.token.unwrap_or_else(|| Uuid::new_v4().to_string());

            let state = store.login(user, token).await?;
            if json {
                print_json(&state)?;
            } else if let Some(user) = state.user {
                println!("✅ 已登入: {} ({})", user.nickname, user.id);
            }
        }
        Command::Logout => {
            UserStore::new(storage).logout().await?;
            println!("👋 已登出");
        }
        Command::Whoami => {
            let user = UserStore::new(storage).require_user().await?;
            if json {
                print_json(&user)?;
            } else {
                println!("👤 {} ({})", user.nickname, user.id);
                if let Some(face_shape) = &user.face_shape {
                    println!("   脸型: {}", face_shape);
                }
            }
        }
        Command::Profile(args) => {
            let patch = UserPatch {
                nickname: args.nickname,
                avatar: args.avatar,
                phone: args.phone,
                gender: args.gender,
            };
            let user = UserStore::new(storage)
                .update_user(patch)
                .await?
                .ok_or_else(|| ShapeError::SessionError {
                    message: "no user is logged in".to_string(),
                })?;
            if json {
                print_json(&user)?;
            } else {
                println!("✅ 资料已更新: {}", user.nickname);
            }
        }
        Command::FaceShape { shape } => {
            let user = UserStore::new(storage)
                .set_face_shape(&shape)
                .await?
                .ok_or_else(|| ShapeError::SessionError {
                    message: "no user is logged in".to_string(),
                })?;
            println!("✅ {} 的脸型已更新: {}", user.nickname, shape);
        }
        Command::Favorite { action } => {
            let store = HairstyleStore::with_history_limit(storage, config.history_limit());
            match action {
                FavoriteCommand::Add { id } => {
                    let style = catalog::require_hairstyle(id)?;
                    let name = style.name.clone();
                    if store.add_favorite(style).await? {
                        println!("⭐ 已收藏: {}", name);
                    } else {
                        println!("ℹ️ 已在收藏中: {}", name);
                    }
                }
                FavoriteCommand::Remove { id } => {
                    if store.remove_favorite(id).await? {
                        println!("🗑️ 已取消收藏: {}", id);
                    } else {
                        println!("ℹ️ 未收藏: {}", id);
                    }
                }
                FavoriteCommand::List => {
                    let favorites = store.favorites().await?;
                    if json {
                        print_json(&favorites)?;
                    } else if favorites.is_empty() {
                        println!("（暂无收藏）");
                    } else {
                        for style in favorites {
                            println!("{:>3}  {}", style.id, style.name);
                        }
                    }
                }
            }
        }
        Command::History { clear } => {
            let store = HairstyleStore::with_history_limit(storage, config.history_limit());
            if clear {
                let cleared = store.clear_history().await?;
                println!("🧹 已清除 {} 条记录", cleared);
            } else {
                let history = store.history().await?;
                if json {
                    print_json(&history)?;
                } else if history.is_empty() {
                    println!("（暂无记录）");
                } else {
                    for record in &history {
                        print_record(record);
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_record(record: &FormulaRecord) {
    println!(
        "🎨 {} → 度数 {} / {} ({})",
        record.target_hex,
        record.target.target_level,
        record.target.target_reflect,
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    println!("  1. {}", record.result.step1);
    println!("  2. {}", record.result.step2);
    println!("  3. {}", record.result.step3);
    println!("  4. {}", record.result.step4);
    if let Some(tips) = &record.result.tips {
        println!("  💡 {}", tips);
    }
}
