pub mod analysis;
pub mod classifier;
pub mod config;
pub mod data_loading;
pub mod entity;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod models;
pub mod progress;
pub mod sentiment;
pub mod statistics;
pub mod stopwords;
pub mod storage;
pub mod title;
pub mod tokenization;
