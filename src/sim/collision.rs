//! Collision and scoring policy
//!
//! Pure checks run against current positions. The hitboxes are deliberately
//! forgiving: both the bird and each mountain are shrunk inward by a fixed
//! padding before testing, and the field edges only end a run once the bird is
//! completely off screen.

use super::state::{Obstacle, Player};

/// Axis-aligned box in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    /// The bird's box shrunk by `padding` on every side
    pub fn player(player: &Player, padding: f32) -> Self {
        Self {
            left: player.left() + padding,
            right: player.right() - padding,
            top: player.top() + padding,
            bottom: player.bottom() - padding,
        }
    }

    /// A mountain's box shrunk by `padding`. It always reaches the field bottom.
    pub fn obstacle(obstacle: &Obstacle, width: f32, field_height: f32, padding: f32) -> Self {
        Self {
            left: obstacle.x + padding,
            right: obstacle.right(width) - padding,
            top: obstacle.top(field_height) + padding,
            bottom: field_height,
        }
    }
}

/// True once the bird is entirely above the top edge or entirely below the bottom edge
#[inline]
pub fn out_of_bounds(player: &Player, field_height: f32) -> bool {
    player.bottom() <= 0.0 || player.top() >= field_height
}

/// True when the mountain's right edge is strictly behind the bird's left edge
/// and it has not been counted yet
#[inline]
pub fn newly_passed(obstacle: &Obstacle, width: f32, player: &Player) -> bool {
    !obstacle.passed && obstacle.right(width) < player.left()
}

/// Padded overlap test between the bird and one mountain
pub fn collides(
    player: &Player,
    obstacle: &Obstacle,
    width: f32,
    field_height: f32,
    padding: f32,
) -> bool {
    let bird = Hitbox::player(player, padding);
    let mountain = Hitbox::obstacle(obstacle, width, field_height, padding);

    let horizontal = bird.right > mountain.left && bird.left < mountain.right;
    // Mountains only occupy the region from their top down to the ground
    let vertical = bird.bottom > mountain.top;

    horizontal && vertical
}

/// True once the mountain's right edge has fully left the field on the left
#[inline]
pub fn offscreen(obstacle: &Obstacle, width: f32) -> bool {
    obstacle.right(width) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    const FIELD_H: f32 = DEFAULT_FIELD_HEIGHT;

    fn player_at(y: f32) -> Player {
        let mut player = Player::new(&Tuning::default());
        player.pos.y = y;
        player
    }

    fn hits(player: &Player, obstacle: &Obstacle) -> bool {
        collides(player, obstacle, OBSTACLE_WIDTH, FIELD_H, HITBOX_PADDING)
    }

    #[test]
    fn test_out_of_bounds_top() {
        // Bottom edge exactly at the top of the field
        assert!(out_of_bounds(&player_at(-PLAYER_HEIGHT), FIELD_H));
        assert!(out_of_bounds(&player_at(-PLAYER_HEIGHT - 50.0), FIELD_H));
        // Still one pixel visible
        assert!(!out_of_bounds(&player_at(-PLAYER_HEIGHT + 1.0), FIELD_H));
    }

    #[test]
    fn test_out_of_bounds_bottom() {
        assert!(!out_of_bounds(&player_at(FIELD_H - 1.0), FIELD_H));
        assert!(out_of_bounds(&player_at(FIELD_H), FIELD_H));
        assert!(out_of_bounds(&player_at(FIELD_H + 10.0), FIELD_H));
    }

    #[test]
    fn test_passed_requires_strictly_behind() {
        let player = player_at(PLAYER_START_Y);
        // Right edge exactly at the bird's left edge: not yet
        let touching = Obstacle::new(PLAYER_X - OBSTACLE_WIDTH, 200.0);
        assert!(!newly_passed(&touching, OBSTACLE_WIDTH, &player));

        let behind = Obstacle::new(PLAYER_X - OBSTACLE_WIDTH - 0.5, 200.0);
        assert!(newly_passed(&behind, OBSTACLE_WIDTH, &player));

        let already = Obstacle {
            passed: true,
            ..behind
        };
        assert!(!newly_passed(&already, OBSTACLE_WIDTH, &player));
    }

    #[test]
    fn test_padding_forgives_horizontal_graze() {
        // Bird spans x 50..150, deep enough to overlap vertically
        let player = player_at(400.0);
        let mountain = Obstacle::new(120.0, 300.0);

        // Raw boxes overlap (150 > 120) but padded ones do not (110 < 160)
        assert!(player.right() > mountain.x);
        assert!(!hits(&player, &mountain));
    }

    #[test]
    fn test_padding_forgives_vertical_graze() {
        // Raw bottom 350 sits below the mountain top at 300, padded 310 does not reach 340
        let player = player_at(260.0);
        let mountain = Obstacle::new(PLAYER_X, 300.0);
        assert!(player.bottom() > mountain.top(FIELD_H));
        assert!(!hits(&player, &mountain));
    }

    #[test]
    fn test_solid_overlap_collides() {
        let player = player_at(400.0);
        let mountain = Obstacle::new(PLAYER_X, 300.0);
        assert!(hits(&player, &mountain));
    }

    #[test]
    fn test_vertical_threshold_is_strict() {
        // Padded bottom exactly on the padded top is not a hit
        let mountain = Obstacle::new(PLAYER_X, 300.0);
        let top = mountain.top(FIELD_H) + HITBOX_PADDING;
        let y = top - PLAYER_HEIGHT + HITBOX_PADDING;
        assert!(!hits(&player_at(y), &mountain));
        assert!(hits(&player_at(y + 0.25), &mountain));
    }

    #[test]
    fn test_mountain_behind_bird_does_not_collide() {
        let player = player_at(500.0);
        let mountain = Obstacle::new(PLAYER_X - OBSTACLE_WIDTH + 2.0 * HITBOX_PADDING, 300.0);
        // Padded right edge (-170 + 300 - 40 = 90) does not pass the padded bird's left edge (90)
        assert!(!hits(&player, &mountain));
    }

    #[test]
    fn test_offscreen_requires_full_exit() {
        assert!(!offscreen(&Obstacle::new(-OBSTACLE_WIDTH, 100.0), OBSTACLE_WIDTH));
        assert!(!offscreen(&Obstacle::new(-OBSTACLE_WIDTH + 1.0, 100.0), OBSTACLE_WIDTH));
        assert!(offscreen(&Obstacle::new(-OBSTACLE_WIDTH - 0.5, 100.0), OBSTACLE_WIDTH));
    }
}
