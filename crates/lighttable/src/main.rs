pub mod app;
pub mod key_binds;
pub mod localize;
pub mod message;
pub mod toolbar;
pub mod views;

use app::Lighttable;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(480.0)
            .min_height(320.0),
    );

    // Optional layout to start in, by name: `cosmic-lighttable culling`.
    let start_layout = std::env::args().nth(1);

    cosmic::app::run::<Lighttable>(settings, start_layout)
}
