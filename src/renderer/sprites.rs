//! Draw-command generation for one frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Snapshot;

/// Images the host loads before the first frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Mountain,
    Bird,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Background, Sprite::Mountain, Sprite::Bird];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Background => "images/background.jpg",
            Sprite::Mountain => "images/mountain.png",
            Sprite::Bird => "images/tiny.png",
        }
    }
}

/// Destination rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// One drawing step, executed in order by a backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear { size: Vec2 },
    Image { sprite: Sprite, rect: Rect },
}

/// Build the commands for a frame: background, mountains (spawn order), then the bird
pub fn frame(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let field = snapshot.field;
    let mut commands = Vec::with_capacity(snapshot.obstacles.len() + 3);

    commands.push(DrawCommand::Clear { size: field });
    commands.push(DrawCommand::Image {
        sprite: Sprite::Background,
        rect: Rect::new(0.0, 0.0, field.x, field.y),
    });

    // Mountains stand on the ground
    for mountain in &snapshot.obstacles {
        commands.push(DrawCommand::Image {
            sprite: Sprite::Mountain,
            rect: Rect::new(
                mountain.x,
                field.y - mountain.height,
                snapshot.obstacle_width,
                mountain.height,
            ),
        });
    }

    commands.push(DrawCommand::Image {
        sprite: Sprite::Bird,
        rect: Rect {
            pos: snapshot.player_pos,
            size: snapshot.player_size,
        },
    });

    commands
}
