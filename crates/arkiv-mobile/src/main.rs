//! Arkiv Mobile Application
//!
//! Android shell entrypoint for the Dioxus mobile app.

#[cfg(target_os = "android")]
mod app;
#[cfg(any(target_os = "android", test))]
mod article_state;
#[cfg(any(target_os = "android", test))]
mod config;
#[cfg(any(target_os = "android", test))]
mod downloads;
#[cfg(any(target_os = "android", test))]
mod secret_store;
#[cfg(any(target_os = "android", test))]
mod session;
#[cfg(target_os = "android")]
mod state;
#[cfg(target_os = "android")]
mod ui;
#[cfg(target_os = "android")]
mod views;

#[cfg(target_os = "android")]
fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arkiv=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Arkiv mobile shell...");
    dioxus::LaunchBuilder::mobile().launch(app::App);
}

#[cfg(not(target_os = "android"))]
fn main() {
    println!(
        "arkiv-mobile is intended for Android targets. Try: cargo build -p arkiv-mobile --target aarch64-linux-android"
    );
}
