/// Tick-driven linear opacity interpolation over a fixed frame budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    elapsed: f32,
    total: f32,
    from: f32,
    to: f32,
    advanced: bool,
}

impl Fade {
    pub fn new(from: f32, to: f32, total_frames: f32) -> Self {
        Self {
            elapsed: 0.0,
            total: total_frames.max(0.0),
            from,
            to,
            advanced: false,
        }
    }

    /// Fade from the node's current opacity down to zero.
    pub fn out_from(current: f32, total_frames: f32) -> Self {
        Self::new(current, 0.0, total_frames)
    }

    pub fn fade_in(total_frames: f32) -> Self {
        Self::new(0.0, 1.0, total_frames)
    }

    /// Accumulate `dt` frames and return the opacity for this tick. Once the
    /// budget is spent the target value is returned exactly.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.advanced = true;
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        if self.total == 0.0 {
            return self.from;
        }
        let t = (self.elapsed / self.total).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Completion is only ever reached through `advance`, never at construction.
    pub fn is_complete(&self) -> bool {
        self.advanced && self.elapsed >= self.total
    }

}
