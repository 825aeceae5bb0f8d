//! RGB gradients over monotone cubic Hermite splines.
//!
//! Each channel is an independent spline over the same stop positions.
//! Channel values are clamped to the channel range and truncated to `u8`
//! only here, on the caller side of the spline.

use hermite_core::{
    errors::{Error, Result},
    Real,
};
use hermite_math::{CubicHermiteSpline, MonotoneCubicBuilder};

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stop positions of the reference gradient.  The last stop repeats the
/// first colour so the gradient cycles smoothly.
pub const REFERENCE_STOPS: [Real; 6] = [0.0, 64.0, 168.0, 257.0, 343.0, 399.0];

/// Colours of the reference gradient, one per stop.
pub const REFERENCE_COLORS: [Rgb; 6] = [
    Rgb::new(0, 7, 100),
    Rgb::new(32, 107, 203),
    Rgb::new(237, 255, 255),
    Rgb::new(255, 170, 0),
    Rgb::new(0, 2, 0),
    Rgb::new(0, 7, 100),
];

/// A colour gradient: one monotone spline per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    red: CubicHermiteSpline,
    green: CubicHermiteSpline,
    blue: CubicHermiteSpline,
    channel_min: Real,
    channel_max: Real,
}

impl Gradient {
    /// Build a gradient with the default monotone slopes.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `stops` and `colors` differ in length,
    /// or `stops` violates the spline preconditions.
    pub fn new(stops: &[Real], colors: &[Rgb]) -> Result<Self> {
        Self::from_builder(&MonotoneCubicBuilder::new(), stops, colors)
    }

    /// Build a gradient with slopes from `builder`.
    pub fn from_builder(
        builder: &MonotoneCubicBuilder,
        stops: &[Real],
        colors: &[Rgb],
    ) -> Result<Self> {
        hermite_core::ensure!(
            stops.len() == colors.len(),
            "need one colour per stop ({} stops, {} colours)",
            stops.len(),
            colors.len()
        );

        let channel = |pick: fn(&Rgb) -> u8| -> Vec<Real> {
            colors.iter().map(|c| Real::from(pick(c))).collect()
        };

        Ok(Self {
            red: builder.build(stops, &channel(|c| c.r))?,
            green: builder.build(stops, &channel(|c| c.g))?,
            blue: builder.build(stops, &channel(|c| c.b))?,
            channel_min: 0.0,
            channel_max: 255.0,
        })
    }

    /// The five-colour gradient of [`REFERENCE_STOPS`] / [`REFERENCE_COLORS`].
    pub fn reference() -> Result<Self> {
        Self::new(&REFERENCE_STOPS, &REFERENCE_COLORS)
    }

    /// Restrict channel output to `[min, max]` before truncation.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] unless `0 <= min <= max <= 255`.
    pub fn with_channel_range(mut self, min: Real, max: Real) -> Result<Self> {
        hermite_core::ensure!(
            (0.0..=255.0).contains(&min) && (min..=255.0).contains(&max),
            "channel range [{min}, {max}] must lie within [0, 255]"
        );
        self.channel_min = min;
        self.channel_max = max;
        Ok(self)
    }

    /// First stop.
    pub fn x_min(&self) -> Real {
        self.red.positions()[0]
    }

    /// Last stop.
    pub fn x_max(&self) -> Real {
        self.red.positions()[self.red.len() - 1]
    }

    /// The red, green and blue splines.
    pub fn splines(&self) -> [&CubicHermiteSpline; 3] {
        [&self.red, &self.green, &self.blue]
    }

    /// Raw, unclamped channel values at `x`.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is outside `[x_min, x_max]`.
    pub fn channels(&self, x: Real) -> Result<[Real; 3]> {
        Ok([
            self.red.evaluate(x)?,
            self.green.evaluate(x)?,
            self.blue.evaluate(x)?,
        ])
    }

    /// Colour at `x`, each channel clamped to the channel range.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is outside `[x_min, x_max]`.
    pub fn color_at(&self, x: Real) -> Result<Rgb> {
        let [r, g, b] = self.channels(x)?;
        Ok(Rgb::new(self.quantize(r), self.quantize(g), self.quantize(b)))
    }

    /// Colour at `x`, repeating the gradient with period `x_max - x_min`.
    ///
    /// Points inside `[x_min, x_max]` are looked up as-is, so `x_max` keeps
    /// its own colour. Points outside are wrapped into `[x_min, x_max)`.
    /// The period is the domain width (399 for the reference gradient), so
    /// every wrapped point stays inside the sampled domain.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is not finite.
    pub fn color_wrapped(&self, x: Real) -> Result<Rgb> {
        let (min, max) = (self.x_min(), self.x_max());
        if !x.is_finite() {
            return Err(Error::OutOfDomain { x, min, max });
        }
        if (min..=max).contains(&x) {
            return self.color_at(x);
        }
        // rem_euclid can round up to the width itself
        let wrapped = (min + (x - min).rem_euclid(max - min)).min(max);
        self.color_at(wrapped)
    }

    fn quantize(&self, v: Real) -> u8 {
        // Saturating cast, truncates toward zero
        v.clamp(self.channel_min, self.channel_max) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_hits_stop_colours() {
        let g = Gradient::reference().unwrap();
        for (&x, &c) in REFERENCE_STOPS.iter().zip(REFERENCE_COLORS.iter()) {
            assert_eq!(g.color_at(x).unwrap(), c, "at x={x}");
        }
    }

    #[test]
    fn reference_between_stops() {
        let g = Gradient::reference().unwrap();
        assert_eq!(g.color_at(32.0).unwrap(), Rgb::new(10, 57, 155));
        assert_eq!(g.color_at(100.0).unwrap(), Rgb::new(98, 168, 243));
        // Red overshoots above 255 here and is clamped
        assert_eq!(g.color_at(200.0).unwrap(), Rgb::new(255, 243, 164));
        // Green dips below 0 here and is clamped
        assert_eq!(g.color_at(360.0).unwrap(), Rgb::new(0, 0, 15));
    }

    #[test]
    fn raw_channels_are_not_clamped() {
        let g = Gradient::reference().unwrap();
        let [r, _, _] = g.channels(200.0).unwrap();
        assert!(r > 255.0);
        let [_, green, _] = g.channels(360.0).unwrap();
        assert!(green < 0.0);
    }

    #[test]
    fn wrapped_lookup_cycles() {
        let g = Gradient::reference().unwrap();
        let base = g.color_at(32.0).unwrap();
        assert_eq!(g.color_wrapped(32.0).unwrap(), base);
        assert_eq!(g.color_wrapped(32.0 + 399.0).unwrap(), base);
        assert_eq!(g.color_wrapped(32.0 - 2.0 * 399.0).unwrap(), base);
        assert!(matches!(
            g.color_wrapped(Real::INFINITY),
            Err(Error::OutOfDomain { .. })
        ));
        assert!(matches!(g.color_wrapped(Real::NAN), Err(Error::OutOfDomain { .. })));
    }

    #[test]
    fn wrapped_lookup_keeps_domain_ends() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let g = Gradient::new(&[0.0, 10.0], &[black, white]).unwrap();
        assert_eq!(g.color_wrapped(0.0).unwrap(), black);
        assert_eq!(g.color_wrapped(10.0).unwrap(), white);
        assert_eq!(g.color_wrapped(15.0).unwrap(), g.color_at(5.0).unwrap());
        assert_eq!(g.color_wrapped(-2.5).unwrap(), g.color_at(7.5).unwrap());
        // A whole number of periods past the end lands on the start
        assert_eq!(g.color_wrapped(20.0).unwrap(), black);
    }

    #[test]
    fn splines_hold_stop_channels() {
        let g = Gradient::reference().unwrap();
        let [red, green, blue] = g.splines();
        let pick = |f: fn(&Rgb) -> u8| -> Vec<Real> {
            REFERENCE_COLORS.iter().map(|c| Real::from(f(c))).collect()
        };
        for s in [red, green, blue] {
            assert_eq!(s.positions(), &REFERENCE_STOPS);
        }
        assert_eq!(red.values(), pick(|c| c.r).as_slice());
        assert_eq!(green.values(), pick(|c| c.g).as_slice());
        assert_eq!(blue.values(), pick(|c| c.b).as_slice());
        // Blue is flat between 257 and 343
        assert_eq!(&blue.slopes()[3..5], &[0.0, 0.0]);
    }

    #[test]
    fn out_of_domain_is_an_error() {
        let g = Gradient::reference().unwrap();
        assert!(matches!(g.color_at(-1.0), Err(Error::OutOfDomain { .. })));
        assert!(matches!(g.color_at(400.0), Err(Error::OutOfDomain { .. })));
    }

    #[test]
    fn channel_range() {
        let g = Gradient::reference()
            .unwrap()
            .with_channel_range(16.0, 235.0)
            .unwrap();
        assert_eq!(g.color_at(0.0).unwrap(), Rgb::new(16, 16, 100));
        assert!(Gradient::reference()
            .unwrap()
            .with_channel_range(10.0, 5.0)
            .is_err());
        assert!(Gradient::reference()
            .unwrap()
            .with_channel_range(0.0, 300.0)
            .is_err());
    }

    #[test]
    fn mismatched_stops_and_colours() {
        let r = Gradient::new(&[0.0, 1.0, 2.0], &[Rgb::new(0, 0, 0), Rgb::new(1, 1, 1)]);
        assert!(matches!(r, Err(Error::InvalidArgument(_))));
        let r = Gradient::new(&[1.0, 0.0], &[Rgb::new(0, 0, 0), Rgb::new(1, 1, 1)]);
        assert!(matches!(r, Err(Error::InvalidArgument(_))));
    }
}
