//! Per-frame simulation step
//!
//! Advances the game by a measured frame time. The order of the steps is the
//! collision tie-break: walls, then paddle, then blocks, then the end checks.

use log::{debug, trace};

use super::collision::{ball_paddle_collision, ball_wall_collision, first_block_hit};
use super::state::{GameEvent, GamePhase, GameState};

/// Held movement keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by `dt` seconds
///
/// Does nothing once the game has ended. Events produced by this tick are
/// left in `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }
    state.frame += 1;

    move_paddle(state, input, dt);
    integrate_ball(state, dt);
    collide_walls(state);
    collide_paddle(state);
    collide_blocks(state);
    check_end(state);
}

/// Left and right are independent: holding both applies both moves
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.tuning.paddle_speed * dt;
    let max_x = state.paddle.max_x(state.tuning.window_width);
    let x = &mut state.paddle.rect.pos.x;

    if input.left {
        *x -= step;
        if *x < 0.0 {
            *x = 0.0;
        }
    }
    if input.right {
        *x += step;
        if *x > max_x {
            *x = max_x;
        }
    }
}

fn integrate_ball(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    ball.rect.pos += ball.vel * state.tuning.ball_speed_scale * dt;
}

fn collide_walls(state: &mut GameState) {
    let hit = ball_wall_collision(&state.ball.rect, state.tuning.window_width);
    if hit.flip_x {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if hit.flip_y {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if hit.any() {
        trace!("wall bounce {:?}, vel now {}", hit, state.ball.vel);
        state.events.push(GameEvent::WallBounce {
            flip_x: hit.flip_x,
            flip_y: hit.flip_y,
        });
    }
}

fn collide_paddle(state: &mut GameState) {
    if ball_paddle_collision(&state.ball.rect, &state.paddle.rect) {
        state.ball.vel.y = -state.ball.vel.y;
        // Compounds on every hit; there is no speed cap
        state.ball.vel.x *= state.tuning.paddle_boost;
        debug!("paddle hit, vel now {}", state.ball.vel);
        state.events.push(GameEvent::PaddleHit);
    }
}

/// At most one block per tick: the first live overlap in row-major order
fn collide_blocks(state: &mut GameState) {
    if let Some(index) = first_block_hit(&state.ball.rect, &state.blocks) {
        state.blocks.destroy(index);
        state.ball.vel.y = -state.ball.vel.y;

        let (row, col) = state.blocks.position(index);
        debug!(
            "block ({row}, {col}) destroyed, {} remaining",
            state.blocks.remaining()
        );
        state
            .events
            .push(GameEvent::BlockDestroyed { index, row, col });
    }
}

fn check_end(state: &mut GameState) {
    if state.ball.rect.top() > state.tuning.window_height {
        debug!("ball left the playfield at frame {}", state.frame);
        state.end(GamePhase::GameOver, GameEvent::GameOver);
    }
    if state.blocks.all_destroyed() {
        debug!("all blocks cleared at frame {}", state.frame);
        state.end(GamePhase::Victory, GameEvent::Victory);
    }
}
