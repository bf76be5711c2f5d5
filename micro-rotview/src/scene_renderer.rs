use embedded_graphics::pixelcolor::Rgb888;

use crate::animation_driver::{AnimationDriver, Clock};
use crate::canvas::{Paint, Surface};
use crate::config::ViewConfig;
use crate::node_chain::NodeChain;
use crate::square_drawer::SquareDrawer;

/// A node reaching its target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct Settle {
    pub index: usize,
    pub scale: f32,
}

pub trait Renderer {
    fn render<S: Surface>(&mut self, surface: &mut S, paint: &mut Paint, now_ms: u64)
        -> Result<Option<Settle>, S::Error>;
}

/// Ties the chain, the driver and the drawer into one frame call and one tap call.
pub struct SceneRenderer {
    chain: NodeChain,
    driver: AnimationDriver,
    drawer: SquareDrawer,
    back_color: Rgb888,
}

impl Renderer for SceneRenderer {
    /// Clears, draws every node at its current scale, then ticks the driver.
    ///
    /// The tick advances the active node and stops the driver when it
    /// settles, which is also what this returns.
    fn render<S>(&mut self, surface: &mut S, paint: &mut Paint, now_ms: u64) -> Result<Option<Settle>, S::Error>
    where
        S: Surface,
    {
        surface.clear(self.back_color)?;
        self.chain.draw(surface, &self.drawer, paint)?;

        let mut settle = None;
        let chain = &mut self.chain;
        self.driver.tick(now_ms, |driver| {
            chain.update(|index, scale| {
                settle = Some(Settle { index, scale });
                driver.stop();
            });
        });
        Ok(settle)
    }
}

impl SceneRenderer {
    /// Zero node or line counts in `config` are clamped to one.
    pub fn new(config: &ViewConfig) -> Self {
        let config = config.sanitized();
        Self {
            chain: NodeChain::new(config.nodes, config.lines),
            driver: AnimationDriver::new(config.frame_delay_ms),
            drawer: SquareDrawer::new(&config),
            back_color: config.back_color,
        }
    }

    /// Starts the current node and the redraw loop. Ignored while a node is animating.
    pub fn handle_tap(&mut self, now_ms: u64) -> bool {
        let driver = &mut self.driver;
        let mut accepted = false;
        self.chain.start_updating(|| {
            driver.start(now_ms);
            accepted = true;
        });
        if accepted {
            viz_log!("SceneRenderer: tap starts node {}", self.chain.current());
        } else {
            viz_log!("SceneRenderer: tap ignored, node {} still animating", self.chain.current());
        }
        accepted
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
}

/// The widget a host embeds: owns the scene, its paint and a clock.
///
/// The host calls [`on_draw`](Self::on_draw) whenever it repaints,
/// [`on_tap`](Self::on_tap) on every press, and polls
/// [`is_redraw_due`](Self::is_redraw_due) to know when to repaint while
/// an animation runs.
pub struct MultiLineSquareView<C> {
    renderer: SceneRenderer,
    paint: Paint,
    clock: C,
    last_settle: Option<Settle>,
}

impl<C: Clock> MultiLineSquareView<C> {
    pub fn create(config: ViewConfig, clock: C) -> Self {
        let renderer = SceneRenderer::new(&config);
        viz_log!(
            "MultiLineSquareView::create called with nodes: {}, lines: {}, frame delay: {} ms",
            renderer.chain().len(),
            renderer.chain().lines(),
            renderer.driver().delay_ms()
        );
        Self {
            renderer,
            paint: Paint::new(config.fore_color, 1),
            clock,
            last_settle: None,
        }
    }

    pub fn on_draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let now_ms = self.clock.now_ms();
        if let Some(settle) = self.renderer.render(surface, &mut self.paint, now_ms)? {
            viz_log!("MultiLineSquareView: node {} settled at {}", settle.index, settle.scale);
            self.last_settle = Some(settle);
        }
        Ok(())
    }

    pub fn on_tap(&mut self) -> bool {
        self.renderer.handle_tap(self.clock.now_ms())
    }

    pub fn is_redraw_due(&self) -> bool {
        self.renderer.driver().is_redraw_due(self.clock.now_ms())
    }

    pub fn is_animating(&self) -> bool {
        self.renderer.driver().is_active()
    }

    pub fn last_settle(&self) -> Option<Settle> {
        self.last_settle
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }
}
