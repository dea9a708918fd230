//! Unit tests for the Car-Hire Agent SDK

pub mod config_tests;

pub mod support;
