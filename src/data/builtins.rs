//! Built-in start shapes.
//!
//! `dino` is the classic Datasaurus point cloud: the scatterplot that looks
//! like a dinosaur and started the whole "same stats, different graphs"
//! exercise. Additional start shapes load through the file arm of
//! [`crate::DataSource`].

use crate::foundation::core::Point;

/// Names of the embedded start shapes, in registration order.
pub fn builtin_names() -> &'static [&'static str] {
    &["dino"]
}

/// Look up an embedded start shape by name.
pub fn builtin_points(name: &str) -> Option<Vec<Point>> {
    match name {
        "dino" => Some(DINO.iter().map(|&(x, y)| Point::new(x, y)).collect()),
        _ => None,
    }
}

#[rustfmt::skip]
const DINO: &[(f64, f64)] = &[
    (55.3846, 97.1795), (51.5385, 96.0256), (46.1538, 94.4872), (42.8205, 91.4103),
    (40.7692, 88.3333), (38.7179, 84.8718), (35.6410, 79.8718), (33.0769, 77.5641),
    (28.9744, 74.4872), (26.1538, 71.4103), (23.0769, 66.4103), (22.3077, 61.7949),
    (22.3077, 57.1795), (23.3333, 52.9487), (25.8974, 51.0256), (29.4872, 51.0256),
    (32.8205, 51.0256), (35.3846, 51.4103), (40.2564, 51.4103), (44.1026, 52.9487),
    (46.6667, 54.1026), (50.0000, 55.2564), (53.0769, 55.6410), (56.6667, 56.0256),
    (59.2308, 57.9487), (61.2821, 62.1795), (61.5385, 66.4103), (61.7949, 69.1026),
    (57.4359, 55.2564), (54.8718, 49.8718), (52.5641, 46.0256), (48.2051, 38.3333),
    (49.4872, 42.1795), (51.0256, 44.1026), (45.3846, 36.4103), (42.8205, 32.5641),
    (38.7179, 31.4103), (35.1282, 30.2564), (32.5641, 32.1795), (30.0000, 36.7949),
    (33.5897, 41.4103), (36.6667, 45.6410), (38.9744, 47.1795), (41.0256, 49.8718),
    (64.8718, 55.2564), (67.9487, 56.7949), (70.5128, 58.3333), (73.0769, 60.2564),
    (75.3846, 62.1795), (77.9487, 64.4872), (80.2564, 67.1795), (82.3077, 70.2564),
    (84.3590, 73.3333), (86.1538, 76.4103), (87.9487, 79.8718), (89.4872, 83.3333),
    (91.0256, 86.7949), (92.5641, 90.2564), (94.1026, 93.3333), (95.8974, 96.4103),
    (97.1795, 99.4872), (98.2051, 97.1795), (96.6667, 94.1026), (95.1282, 91.0256),
    (93.5897, 87.9487), (92.0513, 84.8718), (90.5128, 81.7949), (89.2308, 78.7179),
    (87.6923, 75.6410), (86.1538, 72.3077), (84.6154, 69.1026), (82.8205, 65.8974),
    (80.7692, 62.9487), (78.4615, 60.0000), (76.1538, 57.4359), (73.5897, 54.8718),
    (71.0256, 52.5641), (68.4615, 50.5128), (65.8974, 47.9487), (63.5897, 44.1026),
    (61.7949, 40.2564), (60.2564, 36.4103), (59.2308, 32.5641), (58.2051, 28.7179),
    (57.6923, 24.8718), (57.1795, 21.0256), (56.6667, 17.1795), (56.1538, 13.3333),
    (55.8974, 9.4872), (55.6410, 5.6410), (55.3846, 2.9487), (58.4615, 4.8718),
    (59.4872, 8.2051), (60.5128, 11.7949), (61.2821, 15.3846), (62.0513, 19.2308),
    (62.8205, 23.0769), (63.5897, 26.9231), (64.6154, 30.7692), (52.3077, 28.2051),
    (49.7436, 25.8974), (47.4359, 24.1026), (45.1282, 22.8205), (42.8205, 21.7949),
    (40.5128, 21.2821), (38.2051, 21.0256), (35.8974, 21.2821), (33.8462, 22.0513),
    (32.3077, 19.2308), (31.2821, 15.8974), (30.7692, 12.5641), (30.2564, 9.2308),
    (30.0000, 5.8974), (29.7436, 2.9487), (32.8205, 3.3333), (33.8462, 6.6667),
    (34.6154, 10.0000), (35.3846, 13.3333), (36.1538, 16.6667), (38.4615, 35.8974),
    (40.7692, 36.6667), (43.0769, 37.4359), (45.3846, 38.2051), (47.6923, 38.9744),
    (46.1538, 34.1026), (43.8462, 33.3333), (41.5385, 32.8205), (62.8205, 60.0000),
    (63.5897, 56.6667), (64.1026, 53.3333), (64.8718, 50.0000), (66.1538, 48.2051),
    (67.6923, 49.4872), (69.2308, 50.7692), (53.8462, 48.2051), (51.5385, 47.4359),
    (49.2308, 46.6667), (46.9231, 45.8974), (55.1282, 44.8718), (56.4103, 41.0256),
    (54.6154, 37.9487), (52.8205, 34.8718), (50.5128, 31.7949),
];
