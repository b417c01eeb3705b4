use once_cell::sync::Lazy;
use splinetrail::{fit, Curve, Sample};

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     x, y = (random()-0.5)*i*40, (random()-0.5)*i*40
///     print(f"Sample::new({x}, {y}, {i*0.03 + random()*0.01})")
/// ```
pub static POINTS: [Sample; 10] = [
    Sample::new(   0.0,        0.0,     0.0    ),
    Sample::new( -11.8936,    17.9936,  0.03452),
    Sample::new( -21.0240,    17.1540,  0.06377),
    Sample::new(  57.1108,    -1.0608,  0.09018),
    Sample::new(  79.2128,   -27.1296,  0.12841),
    Sample::new(  17.9452,   -36.5312,  0.15296),
    Sample::new(-100.4556,   -31.6400,  0.18733),
    Sample::new(-124.1916,   -23.7272,  0.21109),
    Sample::new( -46.4088,  -118.2364,  0.24950),
    Sample::new( -43.1784,    31.5552,  0.27388),
];

/// A long wavy stroke, one point every 30ms
pub static STROKE: Lazy<Vec<Sample>> = Lazy::new(|| {
    (0..400)
        .map(|i| {
            let t = i as f64 * 0.03;
            Sample::new(
                200.0 + 150.0 * (0.7 * t).cos(),
                200.0 + 120.0 * (1.3 * t).sin(),
                t,
            )
        })
        .collect()
});

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub SHORT: Vec<Curve>,
    pub LONG: Curve,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            SHORT: [2, 4, 7, 10]
                .into_iter()
                .map(|n| fit(&POINTS[..n]).unwrap())
                .collect(),
            LONG: fit(&STROKE).unwrap(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Curve> {
        self.SHORT.iter().chain(std::iter::once(&self.LONG))
    }
}
