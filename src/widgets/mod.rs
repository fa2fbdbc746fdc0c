//! UI Widgets - self-contained overlay components

pub mod viewfinder;
