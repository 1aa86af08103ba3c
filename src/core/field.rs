use super::color::ColorMode;
use super::constants::TENDRIL_COUNT;
use super::surface::DrawingSurface;
use super::tendril::Tendril;
use glam::DVec2;
use rand::Rng;

/// Fixed bundle of tendrils sharing one center.
pub struct TendrilField {
    center: DVec2,
    tendrils: Vec<Tendril>,
}

impl TendrilField {
    pub fn new<R: Rng + ?Sized>(center: DVec2, rng: &mut R) -> Self {
        let tendrils = (0..TENDRIL_COUNT)
            .map(|_| Tendril::new(center, rng))
            .collect::<Vec<_>>();
        Self { center, tendrils }
    }

    /// Update then draw each tendril, in index order.
    pub fn update_and_draw<S, R>(
        &mut self,
        target: DVec2,
        mode: ColorMode,
        rng: &mut R,
        surface: &mut S,
    )
    where
        S: DrawingSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let center = self.center;
        for t in &mut self.tendrils {
            t.update(target, center);
            t.draw(surface, center, mode, rng);
        }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn tendrils(&self) -> &[Tendril] {
        &self.tendrils
    }
}
