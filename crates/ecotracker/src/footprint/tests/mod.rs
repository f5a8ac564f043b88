mod calculator;
mod common;
mod service;
