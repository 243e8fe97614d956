// src/animation/animation_loop.rs
//
// Owns the live shapes and the canvas. One `tick` handles a stimulus, draws and
// fades every live shape in spawn order, drops the finished ones and presents.

use nannou::prelude::Key;
use rand::Rng;

use crate::config::{Config, Profile};
use crate::controllers::Stimulus;
use crate::render::Canvas;
use crate::services::ShapeFactory;
use crate::views::Shape;

const SHAPE_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct AnimationLoop<C, R> {
    shapes: Vec<Shape>,
    canvas: C,
    factory: ShapeFactory,
    profile: Profile,
    exit_key: Key,
    rng: R,
}

impl<C: Canvas, R: Rng> AnimationLoop<C, R> {
    pub fn new(config: &Config, canvas: C, rng: R) -> Self {
        Self {
            shapes: Vec::with_capacity(SHAPE_CAPACITY),
            canvas,
            factory: ShapeFactory::new(&config.profile),
            profile: config.profile,
            exit_key: config.exit_key,
            rng,
        }
    }

    pub fn tick(&mut self, stimulus: Option<Stimulus>) -> LoopControl {
        if let Some(stimulus) = stimulus {
            if self.handle(stimulus) == LoopControl::Exit {
                return LoopControl::Exit;
            }
        }
        self.advance();
        LoopControl::Continue
    }

    pub fn handle(&mut self, stimulus: Stimulus) -> LoopControl {
        match stimulus {
            Stimulus::Quit => LoopControl::Exit,
            Stimulus::KeyRelease(key) if key == self.exit_key => LoopControl::Exit,
            Stimulus::KeyRelease(_) => {
                self.spawn();
                LoopControl::Continue
            }
            Stimulus::Resize { width, height } => {
                match self.canvas.resize(width, height) {
                    Ok(()) => log::debug!(
                        "canvas resized to {}x{}, keeping {} shapes",
                        width,
                        height,
                        self.shapes.len()
                    ),
                    Err(e) => log::warn!("keeping previous surface: {}", e),
                }
                LoopControl::Continue
            }
        }
    }

    /// Adds a random shape sized for the current canvas.
    pub fn spawn(&mut self) {
        let shape =
            self.factory
                .create_random(self.canvas.width(), self.canvas.height(), &mut self.rng);
        self.shapes.push(shape);
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Draws and fades each live shape, removes finished ones in the same
    /// pass and presents once. Does nothing while there are no shapes.
    pub fn advance(&mut self) {
        if self.shapes.is_empty() {
            return;
        }

        let step_only_when_drawn = self.profile.step_only_when_drawn;
        let canvas = &mut self.canvas;
        let before = self.shapes.len();

        self.shapes.retain_mut(|shape| {
            if shape.is_done() {
                return false;
            }
            if step_only_when_drawn {
                shape.draw_and_step(canvas);
            } else {
                shape.draw(canvas);
                shape.step();
            }
            true
        });

        let removed = before - self.shapes.len();
        if removed > 0 {
            log::trace!("removed {} finished shapes, {} live", removed, self.shapes.len());
        }

        self.canvas.present();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ColorFade;
    use crate::models::{BoxGeometry, Color};
    use crate::render::recording::{DrawCall, RecordingCanvas};
    use crate::views::Geometry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestLoop = AnimationLoop<RecordingCanvas, StdRng>;

    fn test_loop(config: &Config) -> TestLoop {
        AnimationLoop::new(
            config,
            RecordingCanvas::new(1920, 1080),
            StdRng::seed_from_u64(2024),
        )
    }

    fn box_shape(target: Color, x: i32) -> Shape {
        Shape::new(
            Geometry::Box(BoxGeometry::new(x, 0, x + 10, 10)),
            ColorFade::new(target, 255),
        )
    }

    fn run_until_empty(animation: &mut TestLoop) -> usize {
        let mut ticks = 0;
        while !animation.is_empty() {
            animation.tick(None);
            ticks += 1;
            assert!(ticks < 100, "shapes never finished");
        }
        ticks
    }

    #[test]
    fn test_quit_and_exit_key() {
        let config = Config::classic();
        let mut animation = test_loop(&config);

        assert_eq!(animation.tick(Some(Stimulus::Quit)), LoopControl::Exit);
        assert_eq!(
            animation.tick(Some(Stimulus::KeyRelease(Key::Escape))),
            LoopControl::Exit
        );
        assert!(animation.is_empty());
    }

    #[test]
    fn test_other_keys_spawn() {
        let config = Config::classic();
        let mut animation = test_loop(&config);

        assert_eq!(
            animation.tick(Some(Stimulus::KeyRelease(Key::Space))),
            LoopControl::Continue
        );
        animation.tick(Some(Stimulus::KeyRelease(Key::A)));

        assert_eq!(animation.len(), 2);
    }

    #[test]
    fn test_no_present_without_shapes() {
        let config = Config::classic();
        let mut animation = test_loop(&config);

        animation.tick(None);
        animation.tick(None);

        assert!(animation.canvas().calls.is_empty());
    }

    #[test]
    fn test_one_present_per_tick() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        for _ in 0..5 {
            animation.spawn();
        }

        animation.tick(None);

        let calls = &animation.canvas().calls;
        assert_eq!(animation.canvas().presents(), 1);
        assert_eq!(calls.last(), Some(&DrawCall::Present));
        // fill + outline per shape
        assert_eq!(calls.len(), 5 * 2 + 1);
    }

    #[test]
    fn test_spawned_shapes_drain_to_empty() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        let spawned = 25;
        for _ in 0..spawned {
            animation.tick(Some(Stimulus::KeyRelease(Key::Return)));
            assert!(animation.len() <= spawned);
        }

        let mut previous = animation.len();
        while !animation.is_empty() {
            animation.tick(None);
            assert!(animation.len() <= previous);
            previous = animation.len();
        }
        assert!(animation.is_empty());
    }

    #[test]
    fn test_fade_drains_within_ten_ticks() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.push(box_shape(Color::BLACK, 0));

        // 9 steps to finish, the 10th tick removes it
        assert_eq!(run_until_empty(&mut animation), 10);
    }

    #[test]
    fn test_removal_preserves_order() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        let a = box_shape(Color::BLACK, 0);
        let b = box_shape(Color::WHITE, 20);
        let c = box_shape(Color::rgb(10, 20, 30), 40);
        animation.push(a.clone());
        animation.push(b);
        animation.push(c.clone());

        // white target finishes on its first step and is dropped on the next tick
        animation.tick(None);
        assert_eq!(animation.len(), 3);
        animation.tick(None);

        let remaining: Vec<&Geometry> = animation.shapes().iter().map(|s| s.geometry()).collect();
        assert_eq!(remaining, vec![a.geometry(), c.geometry()]);
    }

    #[test]
    fn test_adjacent_finished_shapes_are_not_skipped() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.push(box_shape(Color::WHITE, 0));
        animation.push(box_shape(Color::WHITE, 20));
        animation.push(box_shape(Color::WHITE, 40));
        animation.push(box_shape(Color::BLACK, 60));

        animation.tick(None);
        animation.tick(None);

        assert_eq!(animation.len(), 1);
        assert_eq!(animation.shapes()[0].fade().target(), Color::BLACK);
    }

    #[test]
    fn test_draw_order_follows_spawn_order() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.push(box_shape(Color::BLACK, 0));
        animation.push(box_shape(Color::BLACK, 20));
        animation.tick(None);

        let boxes: Vec<i32> = animation
            .canvas()
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillBox(geometry, _) => Some(geometry.top_left.x),
                _ => None,
            })
            .collect();
        assert_eq!(boxes, vec![0, 20]);
    }

    #[test]
    fn test_finished_shapes_are_not_redrawn() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.push(box_shape(Color::WHITE, 0));

        animation.tick(None);
        animation.canvas_mut().clear();
        animation.tick(None);

        assert!(animation.canvas().fills().is_empty());
        assert_eq!(animation.canvas().presents(), 1);
    }

    #[test]
    fn test_resize_keeps_shapes() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        for _ in 0..4 {
            animation.spawn();
        }
        let before = animation.shapes().to_vec();

        animation.handle(Stimulus::Resize {
            width: 800,
            height: 600,
        });

        assert_eq!(animation.canvas().width, 800);
        assert_eq!(animation.canvas().height, 600);
        assert_eq!(animation.canvas().surfaces, 2);
        assert_eq!(animation.shapes(), &before[..]);
    }

    #[test]
    fn test_failed_resize_keeps_surface() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.canvas_mut().fail_resize = true;

        let control = animation.tick(Some(Stimulus::Resize {
            width: 800,
            height: 600,
        }));

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(animation.canvas().width, 1920);
        assert_eq!(animation.canvas().surfaces, 1);
    }

    #[test]
    fn test_spawn_uses_resized_canvas() {
        let config = Config::classic();
        let mut animation = test_loop(&config);
        animation.handle(Stimulus::Resize {
            width: 800,
            height: 600,
        });

        for _ in 0..200 {
            animation.spawn();
        }
        assert!(animation
            .shapes()
            .iter()
            .all(|shape| shape.bounds().within(800, 600)));
    }

    #[test]
    fn test_coarse_drains_after_shrink() {
        let config = Config::coarse();
        let mut animation = test_loop(&config);
        for _ in 0..50 {
            animation.spawn();
        }
        animation.push(box_shape(Color::BLACK, 1500));
        animation.handle(Stimulus::Resize {
            width: 400,
            height: 300,
        });

        // shapes left outside the smaller canvas still fade and drop out
        run_until_empty(&mut animation);
        assert!(animation.is_empty());
    }

    #[test]
    fn test_coarse_draws_every_live_shape() {
        let config = Config::coarse();
        let mut animation = test_loop(&config);
        animation.push(box_shape(Color::BLACK, 0));
        animation.push(box_shape(Color::BLACK, 1500));
        animation.handle(Stimulus::Resize {
            width: 800,
            height: 600,
        });

        animation.tick(None);

        let faded = Color::rgba(128, 128, 128, 255);
        assert!(animation
            .shapes()
            .iter()
            .all(|shape| shape.fade().current() == faded));
        assert_eq!(animation.canvas().fills(), vec![Color::WHITE, Color::WHITE]);
    }

    #[test]
    fn test_custom_exit_key() {
        let mut config = Config::classic();
        config.exit_key = Key::Q;
        let mut animation = test_loop(&config);

        assert_eq!(
            animation.tick(Some(Stimulus::KeyRelease(Key::Escape))),
            LoopControl::Continue
        );
        assert_eq!(animation.len(), 1);
        assert_eq!(
            animation.tick(Some(Stimulus::KeyRelease(Key::Q))),
            LoopControl::Exit
        );
    }
}
