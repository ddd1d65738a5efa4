//! # CareerLog API ライブラリ
//!
//! ハンドラとルーター構築を公開する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! テストは [`app_builder::build_app`] でルーターを組み立てる。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
