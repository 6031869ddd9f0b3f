use crate::core::axis::ValueDomain;
use crate::core::types::Viewport;
use crate::error::{CoreError, CoreResult};

/// Maps a resolved value domain to inverted-y pixel space.
///
/// Pixel 0 is the top of the viewport, so the domain maximum lands at 0 and
/// the domain minimum at `viewport.height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> CoreResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(CoreError::Validation(
                "value scale domain must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    pub fn from_domain(domain: ValueDomain) -> CoreResult<Self> {
        Self::new(domain.min, domain.max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> CoreResult<f64> {
        if !viewport.is_valid() {
            return Err(CoreError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(CoreError::Validation("value must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = (value - self.domain_min) / span;
        Ok((1.0 - normalized) * f64::from(viewport.height))
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> CoreResult<f64> {
        if !viewport.is_valid() {
            return Err(CoreError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(CoreError::Validation("pixel must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = 1.0 - pixel / f64::from(viewport.height);
        Ok(self.domain_min + normalized * span)
    }
}

/// Maps category indexes to equal-width horizontal bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandScale {
    count: usize,
}

impl BandScale {
    pub fn new(count: usize) -> CoreResult<Self> {
        if count == 0 {
            return Err(CoreError::Validation(
                "band scale requires at least one category".to_owned(),
            ));
        }
        Ok(Self { count })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    pub fn band_width(self, viewport: Viewport) -> CoreResult<f64> {
        if !viewport.is_valid() {
            return Err(CoreError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(f64::from(viewport.width) / self.count as f64)
    }

    /// Pixel x of the center of the band at `index`.
    pub fn center_to_pixel(self, index: usize, viewport: Viewport) -> CoreResult<f64> {
        if index >= self.count {
            return Err(CoreError::Validation(format!(
                "category index {index} out of range for {} bands",
                self.count
            )));
        }
        let width = self.band_width(viewport)?;
        Ok((index as f64 + 0.5) * width)
    }
}
