#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::rngs::SmallRng;

use super::Player;
use crate::common::GridError;
use crate::position::Position;

/// Interactive player reading targets from standard input.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a move typed as two 1-based numbers, `x y`.
pub fn parse_target(line: &str) -> Result<Position, String> {
    let mut parts = line.split_whitespace();
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err("enter exactly two coordinates".to_string()),
    };
    let x: i32 = x
        .parse()
        .map_err(|_| format!("'{}' is not a number", x))?;
    let y: i32 = y
        .parse()
        .map_err(|_| format!("'{}' is not a number", y))?;
    Ok(Position::new(x - 1, y - 1))
}

impl Player for CliPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _size: i32) -> Position {
        loop {
            print!("Your move (x y): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_target(line.trim()) {
                Ok(target) => return target,
                Err(reason) => println!("{}", reason),
            }
        }
    }

    fn notify_rejected(&mut self, _target: Position, error: &GridError) {
        println!("{}", error);
    }
}
