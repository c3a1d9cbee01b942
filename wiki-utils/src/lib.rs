/// Alias table and two-pass alias resolution.
pub mod alias;
/// Idle-expiry tracking for interactive controls.
pub mod control;
/// Generic embed builders shared across commands.
pub mod embed;
/// Classification of failed platform requests.
pub mod failure;
/// Self-timeout control ids and interaction responses.
pub mod interaction;
/// Guild member and role operations.
pub mod member;
/// Message send, reply and delete helpers.
pub mod message;
/// Pure parser helpers.
pub mod parse;
/// Role-based authorization.
pub mod permissions;
/// The server rule book.
pub mod rules;
/// Shared time helpers.
pub mod time;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '-';
