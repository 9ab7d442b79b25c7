//! WebView shell for Qio using `wry` + `tao`.
//!
//! Architecture:
//! - Every screen is an internal page served via the `qio://` custom protocol,
//!   themed at build time from the theme engine's CSS variables.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; pages announce
//!   themselves with `ui_ready` and receive their data by evaluated script.
//! - The async history store is driven from the event loop through a tokio
//!   runtime owned by the shell state.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::navigation::NavigatorTrait;
use crate::services::scanner;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::navigation::{Screen, TAB_SCREENS};
use crate::types::scan::ScanEvent;

#[derive(Debug)]
enum UserEvent {
    LoadScreen(Screen),
    EvalScript(String),
}

struct ShellState {
    app: App,
    rt: tokio::runtime::Runtime,
}

/// Shared stylesheet; colors come from the theme engine via CSS variables.
const SHELL_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}\
body{font-family:var(--font-family);background:var(--background);color:var(--text);height:100vh;display:flex;flex-direction:column;user-select:none}\
main{flex:1;overflow-y:auto;padding:24px 20px 96px}\
h1{font-size:28px;font-weight:700;letter-spacing:.5px;margin-bottom:4px}\
.subtext{color:var(--text-secondary);font-size:14px;margin-bottom:24px}\
.card{background:var(--surface);border:1px solid var(--border);border-radius:16px;padding:16px;margin-bottom:12px}\
.row{display:flex;align-items:center;justify-content:space-between}\
.btn{display:inline-block;border:none;border-radius:9999px;padding:12px 24px;font-size:15px;font-weight:600;cursor:pointer;background:linear-gradient(90deg,var(--primary),var(--secondary));color:var(--background)}\
.btn.ghost{background:var(--surface);color:var(--primary);border:1px solid var(--border)}\
input,textarea,select{width:100%;background:var(--overlay);border:1px solid var(--border);border-radius:8px;color:var(--text);padding:10px;font-size:15px;font-family:inherit}\
.item-title{font-weight:600;font-size:16px}\
.item-sub{color:var(--text-secondary);font-size:12px;margin-top:2px}\
.item-kind{color:var(--primary);font-size:11px;font-weight:700;text-transform:uppercase;margin-right:12px}\
.empty{color:var(--text-secondary);text-align:center;margin-top:80px}\
.tabbar{position:fixed;left:0;right:0;bottom:0;height:60px;display:flex;background:var(--surface);border-top:1px solid var(--border)}\
.tab{flex:1;display:flex;align-items:center;justify-content:center;font-size:13px;font-weight:600;color:var(--text-secondary);cursor:pointer}\
.tab.active{color:var(--primary)}\
.toast{position:fixed;bottom:76px;left:50%;transform:translateX(-50%);background:var(--surface);border:1px solid var(--border);color:var(--text);padding:10px 20px;border-radius:9999px;opacity:0;transition:opacity .2s}\
.toast.show{opacity:1}";

const SHELL_JS: &str = "\
window.__qio_ipc=function(cmd,args){window.ipc.postMessage(JSON.stringify(Object.assign({cmd:cmd},args||{})))};\
window.__qio_toast=function(msg){var t=document.getElementById('toast');if(!t)return;t.textContent=msg;t.classList.add('show');setTimeout(function(){t.classList.remove('show')},1800)};\
document.querySelectorAll('.tab').forEach(function(el){el.addEventListener('click',function(){__qio_ipc('navigate',{screen:el.dataset.screen})})});";

/// Builds a themed internal page with the bottom tab bar.
fn internal_page(state: &ShellState, screen: Screen, body: &str, extra_js: &str) -> String {
    let vars = state.app.theme_engine.css_variables();
    let mut css_vars = String::from(":root{");
    let mut names: Vec<&String> = vars.keys().collect();
    names.sort();
    for name in names {
        css_vars.push_str(name);
        css_vars.push(':');
        css_vars.push_str(&vars[name]);
        css_vars.push(';');
    }
    css_vars.push('}');

    let mut tabs = String::new();
    for tab in TAB_SCREENS {
        let active = if tab == screen { " active" } else { "" };
        tabs.push_str(&format!(
            "<div class=\"tab{}\" data-screen=\"{}\">{}</div>",
            active,
            tab.as_str(),
            tab.title()
        ));
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>{}{}</style></head>\
         <body><main>{}</main><div class=\"tabbar\">{}</div><div class=\"toast\" id=\"toast\"></div>\
         <script>{}</script><script>{}</script></body></html>",
        css_vars, SHELL_CSS, body, tabs, SHELL_JS, extra_js
    )
}

fn generator_html(state: &ShellState) -> String {
    let body = "<h1>Generator</h1><div class=\"subtext\">Create your unique QR Code</div>\
        <div class=\"card\" style=\"text-align:center;padding:32px\">\
        <div id=\"preview\" style=\"display:inline-block;background:#fff;color:#000;padding:24px;border-radius:16px;max-width:260px;word-break:break-all;font-family:monospace;font-size:12px\"></div>\
        </div>\
        <div class=\"card\">\
        <label class=\"item-sub\" for=\"content\">Content</label>\
        <textarea id=\"content\" rows=\"3\" placeholder=\"Enter URL or Text\">https://scanova.app</textarea>\
        <div style=\"margin-top:12px\"><button class=\"btn\" id=\"save\">Save to History</button></div>\
        </div>";
    let js = "\
var c=document.getElementById('content'),p=document.getElementById('preview');\
function sync(){p.textContent=c.value||' '}\
c.addEventListener('input',sync);sync();\
document.getElementById('save').addEventListener('click',function(){\
  if(c.value.trim())__qio_ipc('save_generated',{content:c.value})\
});\
__qio_ipc('ui_ready',{});";
    internal_page(state, Screen::Generator, body, js)
}

fn scanner_html(state: &ShellState) -> String {
    let body = "<h1>Scanner</h1>\
        <div class=\"subtext\">Camera capture is delegated to the device; enter a decoded payload to record a scan.</div>\
        <div class=\"card\">\
        <label class=\"item-sub\" for=\"payload\">Decoded payload</label>\
        <textarea id=\"payload\" rows=\"3\" placeholder=\"Scanned data\"></textarea>\
        <div style=\"margin-top:12px\">\
        <label class=\"item-sub\" for=\"format\">Format</label>\
        <select id=\"format\">\
        <option value=\"qr\">QR Code</option>\
        <option value=\"ean13\">EAN-13</option>\
        <option value=\"ean8\">EAN-8</option>\
        <option value=\"code128\">Code 128</option>\
        <option value=\"code39\">Code 39</option>\
        </select></div>\
        <div style=\"margin-top:12px\"><button class=\"btn\" id=\"record\">Record Scan</button></div>\
        </div>";
    let js = "\
document.getElementById('record').addEventListener('click',function(){\
  var p=document.getElementById('payload').value;\
  if(p.trim())__qio_ipc('record_scan',{data:p,format:document.getElementById('format').value})\
});\
__qio_ipc('ui_ready',{});";
    internal_page(state, Screen::Scanner, body, js)
}

fn history_html(state: &ShellState) -> String {
    let body = "<h1>Scan History</h1><div class=\"subtext\">Your scanned and generated codes</div>\
        <div id=\"list\"></div>\
        <div style=\"text-align:center;margin-top:16px\">\
        <button class=\"btn ghost\" id=\"clear\" style=\"display:none\">Clear All</button>\
        </div>";
    let js = "\
function renderHistory(records){\
  var list=document.getElementById('list');list.innerHTML='';\
  if(!records.length){\
    var e=document.createElement('div');e.className='empty';e.textContent='No history found';list.appendChild(e);\
    document.getElementById('clear').style.display='none';return;\
  }\
  document.getElementById('clear').style.display='inline-block';\
  records.forEach(function(r){\
    var card=document.createElement('div');card.className='card row';\
    var left=document.createElement('div');\
    var title=document.createElement('div');title.className='item-title';title.textContent=r.title;\
    var sub=document.createElement('div');sub.className='item-sub';sub.textContent=r.subtitle+' · '+new Date(r.createdAt).toLocaleString();\
    left.appendChild(title);left.appendChild(sub);\
    var right=document.createElement('div');right.className='row';\
    var kind=document.createElement('span');kind.className='item-kind';kind.textContent=r.kind;\
    var del=document.createElement('button');del.className='btn ghost';del.textContent='Delete';\
    del.addEventListener('click',function(){__qio_ipc('history_remove',{id:r.id})});\
    right.appendChild(kind);right.appendChild(del);\
    card.appendChild(left);card.appendChild(right);list.appendChild(card);\
  });\
}\
document.getElementById('clear').addEventListener('click',function(){__qio_ipc('history_clear',{})});\
__qio_ipc('ui_ready',{});";
    internal_page(state, Screen::History, body, js)
}

fn settings_html(state: &ShellState) -> String {
    let body = "<h1>Settings</h1><div class=\"subtext\"></div>\
        <div class=\"card row\">\
        <div><div class=\"item-title\">Theme</div><div class=\"item-sub\" id=\"theme-label\"></div></div>\
        <button class=\"btn ghost\" id=\"theme-toggle\">Toggle</button>\
        </div>\
        <div class=\"card row\">\
        <div class=\"item-title\">Vibrate on Scan</div>\
        <input type=\"checkbox\" id=\"vibrate\" style=\"width:auto\">\
        </div>\
        <div class=\"card row\" id=\"about\" style=\"cursor:pointer\">\
        <div class=\"item-title\">About Qio</div><span class=\"item-sub\">›</span>\
        </div>";
    let js = "\
function applySettings(s){\
  document.getElementById('theme-label').textContent=s.isDark?'Dark Mode':'Light Mode';\
  document.getElementById('vibrate').checked=!!s.vibrateOnScan;\
}\
document.getElementById('theme-toggle').addEventListener('click',function(){__qio_ipc('toggle_theme',{})});\
document.getElementById('vibrate').addEventListener('change',function(){__qio_ipc('set_vibrate',{enabled:this.checked})});\
document.getElementById('about').addEventListener('click',function(){__qio_ipc('navigate',{screen:'about'})});\
__qio_ipc('ui_ready',{});";
    internal_page(state, Screen::Settings, body, js)
}

fn about_html(state: &ShellState) -> String {
    let body = format!(
        "<h1>About Qio</h1><div class=\"subtext\">Version {}</div>\
        <div class=\"card\">\
        <div class=\"item-title\">Qio</div>\
        <div class=\"item-sub\">Generate and scan QR codes and barcodes, with a local, private scan history. Nothing leaves your device.</div>\
        </div>\
        <button class=\"btn ghost\" id=\"back\">Back</button>",
        env!("CARGO_PKG_VERSION")
    );
    let js = "document.getElementById('back').addEventListener('click',function(){__qio_ipc('back',{})});\
__qio_ipc('ui_ready',{});";
    internal_page(state, Screen::About, &body, js)
}

fn screen_html(state: &ShellState, screen: Screen) -> String {
    match screen {
        Screen::Generator => generator_html(state),
        Screen::Scanner => scanner_html(state),
        Screen::History => history_html(state),
        Screen::Settings => settings_html(state),
        Screen::About => about_html(state),
    }
}

// ─── IPC handler ───

/// Script pushing the current screen's data into the page.
fn screen_data_script(state: &ShellState) -> Option<String> {
    match state.app.navigator.current() {
        Screen::History => {
            let records = state.rt.block_on(state.app.history.list());
            let json = serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string());
            Some(format!(
                "if(typeof renderHistory==='function')renderHistory({})",
                json
            ))
        }
        Screen::Settings => {
            let settings = state.app.settings_engine.settings();
            let json = serde_json::json!({
                "isDark": state.app.theme_engine.is_dark(),
                "vibrateOnScan": settings.scanner.vibrate_on_scan,
            });
            Some(format!(
                "if(typeof applySettings==='function')applySettings({})",
                json
            ))
        }
        _ => None,
    }
}

fn handle_ipc(state: &mut ShellState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => screen_data_script(state).map(UserEvent::EvalScript),

        "navigate" => {
            let screen = msg
                .get("screen")
                .and_then(|v| v.as_str())
                .and_then(Screen::from_str)?;
            if screen.is_tab() {
                let _ = state.app.navigator.activate_tab(screen);
            } else {
                state.app.navigator.push(screen);
            }
            Some(UserEvent::LoadScreen(state.app.navigator.current()))
        }

        "back" => {
            if state.app.navigator.pop() {
                Some(UserEvent::LoadScreen(state.app.navigator.current()))
            } else {
                None
            }
        }

        "save_generated" => {
            let content = msg.get("content").and_then(|v| v.as_str()).unwrap_or("");
            if content.trim().is_empty() {
                return None;
            }
            let candidate = scanner::candidate_from_generated(content);
            let s = &mut *state;
            match s.rt.block_on(s.app.history.add(candidate)) {
                Ok(_) => Some(UserEvent::EvalScript(
                    "__qio_toast('Saved to history')".into(),
                )),
                Err(e) => {
                    log::error!("failed to save generated code: {}", e);
                    Some(UserEvent::EvalScript("__qio_toast('Failed to save')".into()))
                }
            }
        }

        "record_scan" => {
            let data = msg.get("data").and_then(|v| v.as_str()).unwrap_or("");
            let format = msg.get("format").and_then(|v| v.as_str()).unwrap_or("qr");
            if data.trim().is_empty() {
                return None;
            }
            let candidate = scanner::candidate_from_scan(&ScanEvent::new(data, format));
            let s = &mut *state;
            match s.rt.block_on(s.app.history.add(candidate)) {
                Ok(record) => Some(UserEvent::EvalScript(format!(
                    "__qio_toast('Recorded {}')",
                    record.kind.display_name()
                ))),
                Err(e) => {
                    log::error!("failed to record scan: {}", e);
                    Some(UserEvent::EvalScript("__qio_toast('Failed to save')".into()))
                }
            }
        }

        "history_remove" => {
            let id = msg.get("id").and_then(|v| v.as_str())?.to_string();
            let s = &mut *state;
            if let Err(e) = s.rt.block_on(s.app.history.remove_by_id(&id)) {
                log::error!("failed to remove history record {}: {}", id, e);
            }
            screen_data_script(state).map(UserEvent::EvalScript)
        }

        "history_clear" => {
            let s = &mut *state;
            if let Err(e) = s.rt.block_on(s.app.history.clear()) {
                log::error!("failed to clear history: {}", e);
            }
            screen_data_script(state).map(UserEvent::EvalScript)
        }

        "toggle_theme" => {
            let mode = state.app.theme_engine.toggle();
            if let Err(e) = state.app.settings_engine.set_theme(mode) {
                log::warn!("failed to persist theme mode: {}", e);
            }
            // Colors are baked into the page at build time, so reload
            Some(UserEvent::LoadScreen(state.app.navigator.current()))
        }

        "set_vibrate" => {
            let enabled = msg.get("enabled").and_then(|v| v.as_bool()).unwrap_or(true);
            if let Err(e) = state.app.settings_engine.set_vibrate_on_scan(enabled) {
                log::warn!("failed to persist vibrate setting: {}", e);
            }
            None
        }

        _ => None,
    }
}

// ─── Main entry point ───

pub fn run() {
    let db_path = crate::platform::get_data_dir().join("qio.db");
    let app = App::new(&db_path.to_string_lossy()).expect("Failed to initialize Qio");
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let state = Arc::new(Mutex::new(ShellState { app, rt }));

    {
        let mut s = state.lock().unwrap();
        s.app.startup();
    }

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Qio")
        .with_inner_size(tao::dpi::LogicalSize::new(420.0, 820.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let proto_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("qio".into(), move |_wv_id, request| {
            let path = request.uri().path().trim_start_matches('/');
            let s = proto_state.lock().unwrap();
            let screen = Screen::from_str(path).unwrap_or(Screen::Generator);
            let html = screen_html(&s, screen);
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("qio://localhost/generator")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = state.lock().unwrap();
                s.app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadScreen(screen) => {
                    let url = format!("qio://localhost/{}", screen.as_str());
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
