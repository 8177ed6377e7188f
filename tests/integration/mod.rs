//! Integration tests for the gridpaper generator, configuration and CLI

mod cli_commands;
mod generator_scenarios;
