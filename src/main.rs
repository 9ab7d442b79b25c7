//! Qio — QR & barcode companion with local scan history.
//!
//! Entry point: opens the WebView shell when built with the `gui` feature.
//! When built without it, runs an interactive console demo of each component.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    qio::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Qio v{} — Demo Mode                      ║", env!("CARGO_PKG_VERSION"));
    println!("║        QR & barcode companion with local scan history        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    demo_storage(&rt);
    demo_history_store(&rt);
    demo_scanner();
    demo_theme();
    demo_settings();
    demo_navigation();
    demo_app_core(&rt);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_storage(rt: &tokio::runtime::Runtime) {
    use qio::storage::{SqliteBackend, StorageBackend};
    section("Storage Backend");

    let backend = SqliteBackend::open_in_memory().expect("open backend");
    rt.block_on(async {
        backend.set("demo.key", "hello").await.unwrap();
        let value = backend.get("demo.key").await.unwrap();
        println!("  set/get round-trip: {:?}", value);
        backend.remove("demo.key").await.unwrap();
        let gone = backend.get("demo.key").await.unwrap();
        println!("  after remove: {:?}", gone);
    });
}

#[cfg(not(feature = "gui"))]
fn demo_history_store(rt: &tokio::runtime::Runtime) {
    use qio::managers::history_store::HistoryStore;
    use qio::storage::SqliteBackend;
    use qio::types::history::{RecordCandidate, RecordKind};
    section("History Store");

    let backend = SqliteBackend::open_in_memory().expect("open backend");
    let store = HistoryStore::new(backend);

    rt.block_on(async {
        let first = store
            .add(RecordCandidate {
                kind: Some(RecordKind::Link),
                ..RecordCandidate::new("https://example.com")
            })
            .await
            .unwrap();
        println!("  added: {} [{}] \"{}\"", first.id, first.kind.as_str(), first.title);

        store.add(RecordCandidate::new("plain payload")).await.unwrap();
        let records = store.list().await;
        println!("  list (newest first):");
        for r in &records {
            println!("    {} — {} ({})", r.id, r.title, r.subtitle);
        }

        let removed = store.remove_by_id(&first.id).await.unwrap();
        println!("  removed {}: {}", first.id, removed);
        println!("  remaining: {}", store.list().await.len());

        store.clear().await.unwrap();
        println!("  after clear: {} records", store.list().await.len());
    });
}

#[cfg(not(feature = "gui"))]
fn demo_scanner() {
    use qio::services::scanner;
    use qio::types::scan::ScanEvent;
    section("Scanner Classification");

    let events = [
        ScanEvent::new("https://example.com", "qr"),
        ScanEvent::new("WIFI:S:HomeNet;T:WPA;P:secret;;", "qr"),
        ScanEvent::new("Call me tomorrow", "qr"),
        ScanEvent::new("4006381333931", "ean13"),
    ];
    for event in &events {
        let candidate = scanner::candidate_from_scan(event);
        println!(
            "  {:30} [{}] → {}",
            event.data,
            event.format,
            candidate.kind.unwrap().as_str()
        );
    }
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use qio::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
    use qio::types::settings::ThemeMode;
    section("Theme Engine");

    let mut engine = ThemeEngine::new(ThemeMode::System);
    println!("  system resolves to: {:?}", engine.effective_mode());
    let toggled = engine.toggle();
    println!("  after toggle: {:?}", toggled);
    let vars = engine.css_variables();
    println!("  background: {}", vars.get("--background").unwrap());
    println!("  primary:    {}", vars.get("--primary").unwrap());
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use qio::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("/tmp/qio-demo-settings.json".to_string()));
    let settings = engine.load().unwrap_or_default();
    println!("  theme:           {:?}", settings.appearance.theme);
    println!("  vibrate on scan: {}", settings.scanner.vibrate_on_scan);
    println!("  barcode formats: {:?}", settings.scanner.barcode_formats);
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use qio::managers::navigation::{Navigator, NavigatorTrait};
    use qio::types::navigation::Screen;
    section("Navigation");

    let mut nav = Navigator::new();
    println!("  initial: {}", nav.current().title());
    nav.activate_tab(Screen::Settings).unwrap();
    nav.push(Screen::About);
    println!("  stack: {:?}", nav.stack());
    nav.pop();
    println!("  after back: {}", nav.current().title());
}

#[cfg(not(feature = "gui"))]
fn demo_app_core(rt: &tokio::runtime::Runtime) {
    use qio::app::App;
    section("App Core");

    let mut app = App::new("/tmp/qio-demo.db").expect("Failed to initialize Qio");
    app.startup();
    let count = rt.block_on(app.history.list()).len();
    println!("  history records on disk: {}", count);
    app.shutdown();
    println!("  app lifecycle complete");
}
