use avatar_widget::app::App;
use avatar_widget::application_port::AvatarService;
use avatar_widget::logger::*;
use avatar_widget::settings::*;
use futures_util::future::join_all;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let app = App::try_new(&project_settings)?;

    if cli.hide {
        app.avatar_service.hide_avatar();
        info!("avatar hidden");
    }

    // Issued back to back without waiting, like rapid selections in a UI.
    let updates: Vec<_> = cli
        .users
        .into_iter()
        .map(|user| app.avatar_service.spawn_update(user.into()))
        .collect();
    for joined in join_all(updates).await {
        if let Err(e) = joined {
            error!("avatar update task failed: {}", e);
        }
    }

    info!(
        visibility = ?app.container_visibility(),
        src = ?app.image_src(),
        "final avatar state"
    );
    println!(
        "{}: {:?}, src = {}",
        app.elements.container,
        app.container_visibility(),
        app.image_src().unwrap_or_default()
    );

    Ok(())
}
