//! Logging utilities for the demo servers.
//!
//! Plain stdout/stderr logging with local timestamps: startup banner,
//! access lines, and `[WARN]`/`[ERROR]` prefixed diagnostics.

use chrono::Local;
use hyper::{Method, StatusCode, Uri, Version};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(name: &str, addr: &SocketAddr, template_count: usize) {
    println!("======================================");
    println!("{name} started successfully");
    println!("Listening on: http://{addr}");
    println!("Templates loaded: {template_count}");
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: StatusCode) {
    println!("[{}] [Response] {status}", timestamp());
}

pub fn log_form_field(field: &str, value: &str) {
    println!("[{}] [Form] {field}={value}", timestamp());
}

pub fn log_upload(original: &str, stored: &str) {
    println!("[{}] [Upload] '{original}' stored as '{stored}'", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[{}] [ERROR] Failed to serve connection: {err:?}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}
