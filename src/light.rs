use std::fmt;
use std::str::FromStr;

/// A simulated light source: zenith measured from the vertical, azimuth
/// clockwise from the reference direction, both in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSource {
    pub zenith_deg: f32,
    pub azimuth_deg: f32,
}

impl LightSource {
    pub fn new(zenith_deg: f32, azimuth_deg: f32) -> LightSource {
        LightSource {
            zenith_deg,
            azimuth_deg,
        }
    }

    pub fn zenith_rad(&self) -> f32 {
        self.zenith_deg.to_radians()
    }

    pub fn azimuth_rad(&self) -> f32 {
        self.azimuth_deg.to_radians()
    }

    /// Name for the output image produced under this light, embedding
    /// both angles.
    pub fn output_name(&self) -> String {
        format!("zenit{}_azimut{}", self.zenith_deg, self.azimuth_deg)
    }
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            zenith_deg: 45.0,
            azimuth_deg: 315.0,
        }
    }
}

impl FromStr for LightSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (zenith, azimuth) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `zenith,azimuth`, got `{}`", s))?;

        let zenith_deg = zenith
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("failed to parse zenith: {}", e))?;
        let azimuth_deg = azimuth
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("failed to parse azimuth: {}", e))?;

        Ok(LightSource::new(zenith_deg, azimuth_deg))
    }
}

impl fmt::Display for LightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.zenith_deg, self.azimuth_deg)
    }
}

/// An ordered batch of light sources, parsed from a `+`-separated list
/// of `zenith,azimuth` pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct LightList(pub Vec<LightSource>);

impl FromStr for LightList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lights: Result<Vec<LightSource>, String> =
            s.split('+').map(str::parse).collect();

        Ok(LightList(lights?))
    }
}

impl fmt::Display for LightList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> =
            self.0.iter().map(LightSource::to_string).collect();
        write!(f, "{}", parts.join("+"))
    }
}
