//! Normative bands by scale, age group and gender.
//!
//! Each row is `(min, max, percentile, decatype)` over an inclusive raw
//! score range. Rows within a partition are ordered and must cover 0–60.

/// `(min, max, percentile, decatype)`
pub(crate) type Band = (u8, u8, u8, u8);

pub(crate) const STATE_ADOLESCENT_MALE: &[Band] = &[
    (0, 0, 2, 1), (1, 1, 3, 2), (2, 2, 4, 2), (3, 5, 5, 2), (6, 8, 10, 3), (9, 10, 15, 3),
    (11, 12, 20, 4), (13, 13, 25, 4), (14, 15, 30, 4), (16, 16, 35, 5), (17, 17, 40, 5),
    (18, 18, 45, 5), (19, 20, 50, 5), (21, 21, 55, 6), (22, 22, 60, 6), (23, 23, 65, 6),
    (24, 25, 70, 7), (26, 26, 75, 7), (27, 28, 80, 7), (29, 30, 85, 8), (31, 31, 89, 8),
    (32, 33, 90, 8), (34, 36, 95, 9), (37, 37, 96, 9), (38, 38, 97, 9), (39, 40, 98, 10),
    (41, 60, 99, 10),
];

pub(crate) const STATE_ADOLESCENT_FEMALE: &[Band] = &[
    (0, 0, 2, 1), (1, 2, 3, 2), (3, 3, 4, 2), (4, 6, 5, 2), (7, 9, 10, 3), (10, 11, 15, 3),
    (12, 13, 20, 4), (14, 15, 25, 4), (16, 16, 30, 4), (17, 18, 35, 5), (19, 19, 40, 5),
    (20, 20, 45, 5), (21, 22, 50, 5), (23, 23, 55, 6), (24, 24, 60, 6), (25, 26, 65, 6),
    (27, 27, 70, 7), (28, 29, 75, 7), (30, 31, 80, 7), (32, 33, 85, 8), (34, 34, 89, 8),
    (35, 36, 90, 8), (37, 39, 95, 9), (40, 40, 96, 9), (41, 42, 97, 9), (43, 44, 98, 10),
    (45, 60, 99, 10),
];

pub(crate) const STATE_ADULT_MALE: &[Band] = &[
    (0, 0, 3, 2), (1, 1, 4, 2), (2, 4, 5, 2), (5, 7, 10, 3), (8, 9, 15, 3), (10, 11, 20, 4),
    (12, 13, 25, 4), (14, 15, 30, 4), (16, 16, 35, 5), (17, 17, 40, 5), (18, 19, 45, 5),
    (20, 20, 50, 5), (21, 22, 55, 6), (23, 23, 60, 6), (24, 24, 65, 6), (25, 26, 70, 7),
    (27, 28, 75, 7), (29, 30, 80, 7), (31, 32, 85, 8), (33, 33, 89, 8), (34, 35, 90, 8),
    (36, 38, 95, 9), (39, 39, 96, 9), (40, 40, 97, 9), (41, 43, 98, 10), (44, 60, 99, 10),
];

pub(crate) const STATE_ADULT_FEMALE: &[Band] = &[
    (0, 1, 3, 2), (2, 2, 4, 2), (3, 5, 5, 2), (6, 9, 10, 3), (10, 11, 15, 3), (12, 13, 20, 4),
    (14, 15, 25, 4), (16, 17, 30, 4), (18, 19, 35, 5), (20, 20, 40, 5), (21, 22, 45, 5),
    (23, 23, 50, 5), (24, 25, 55, 6), (26, 26, 60, 6), (27, 28, 65, 6), (29, 29, 70, 7),
    (30, 31, 75, 7), (32, 33, 80, 7), (34, 36, 85, 8), (37, 37, 89, 8), (38, 39, 90, 8),
    (40, 42, 95, 9), (43, 44, 96, 9), (45, 46, 97, 9), (47, 48, 98, 10), (49, 60, 99, 10),
];

pub(crate) const TRAIT_ADOLESCENT_MALE: &[Band] = &[
    (0, 1, 1, 1), (2, 3, 2, 1), (4, 4, 3, 2), (5, 5, 4, 2), (6, 7, 5, 2), (8, 10, 10, 3),
    (11, 12, 15, 3), (13, 13, 20, 4), (14, 15, 25, 4), (16, 16, 30, 4), (17, 17, 35, 5),
    (18, 18, 40, 5), (19, 19, 45, 5), (20, 21, 50, 5), (22, 22, 55, 6), (23, 23, 60, 6),
    (24, 24, 65, 6), (25, 25, 70, 7), (26, 27, 75, 7), (28, 28, 80, 7), (29, 30, 85, 8),
    (31, 31, 89, 8), (32, 33, 90, 8), (34, 35, 95, 9), (36, 36, 96, 9), (37, 37, 97, 9),
    (38, 39, 98, 10), (40, 60, 99, 10),
];

pub(crate) const TRAIT_ADOLESCENT_FEMALE: &[Band] = &[
    (0, 3, 1, 1), (4, 5, 2, 1), (6, 7, 3, 2), (8, 8, 4, 2), (9, 10, 5, 2), (11, 13, 10, 3),
    (14, 15, 15, 3), (16, 17, 20, 4), (18, 18, 25, 4), (19, 20, 30, 4), (21, 21, 35, 5),
    (22, 22, 40, 5), (23, 23, 45, 5), (24, 25, 50, 5), (26, 26, 55, 6), (27, 27, 60, 6),
    (28, 29, 65, 6), (30, 30, 70, 7), (31, 31, 75, 7), (32, 33, 80, 7), (34, 35, 85, 8),
    (36, 36, 89, 8), (37, 38, 90, 8), (39, 41, 95, 9), (42, 42, 96, 9), (43, 43, 97, 9),
    (44, 45, 98, 10), (46, 60, 99, 10),
];

pub(crate) const TRAIT_ADULT_MALE: &[Band] = &[
    (0, 0, 2, 1), (1, 1, 3, 2), (2, 2, 4, 2), (3, 5, 5, 2), (6, 8, 10, 3), (9, 10, 15, 3),
    (11, 12, 20, 4), (13, 13, 25, 4), (14, 15, 30, 4), (16, 16, 35, 5), (17, 17, 40, 5),
    (18, 19, 45, 5), (20, 20, 50, 5), (21, 21, 55, 6), (22, 22, 60, 6), (23, 24, 65, 6),
    (25, 25, 70, 7), (26, 27, 75, 7), (28, 28, 80, 7), (29, 30, 85, 8), (31, 32, 89, 8),
    (33, 33, 90, 8), (34, 36, 95, 9), (37, 37, 96, 9), (38, 39, 97, 9), (40, 41, 98, 10),
    (42, 60, 99, 10),
];

pub(crate) const TRAIT_ADULT_FEMALE: &[Band] = &[
    (0, 2, 1, 1), (3, 4, 2, 1), (5, 6, 3, 2), (7, 7, 4, 2), (8, 9, 5, 2), (10, 12, 10, 3),
    (13, 14, 15, 3), (15, 16, 20, 4), (17, 18, 25, 4), (19, 19, 30, 4), (20, 21, 35, 5),
    (22, 22, 40, 5), (23, 23, 45, 5), (24, 25, 50, 5), (26, 26, 55, 6), (27, 27, 60, 6),
    (28, 28, 65, 6), (29, 30, 70, 7), (31, 32, 75, 7), (33, 33, 80, 7), (34, 35, 85, 8),
    (36, 37, 89, 8), (38, 38, 90, 8), (39, 41, 95, 9), (42, 42, 96, 9), (43, 44, 97, 9),
    (45, 46, 98, 10), (47, 60, 99, 10),
];
