//! Qio UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The screens are rendered as HTML/CSS/JS inside the WebView, themed from
//! the theme engine's palette. Communication between the Rust backend and
//! the JS frontend uses wry IPC.

pub mod webview_app;
