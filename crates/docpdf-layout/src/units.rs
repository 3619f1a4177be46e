/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

/// Points per centimetre.
pub const CM: f32 = MM * 10.0;

pub fn mm(value: f32) -> f32 {
    value * MM
}

pub fn cm(value: f32) -> f32 {
    value * CM
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_metric_units() {
        assert!((mm(25.4) - 72.0).abs() < 1e-4);
        assert!((cm(2.0) - 56.692_913).abs() < 1e-3);
    }
}
