//! Resolution 0 cells: home faces, neighbor tables and face lookups.

use crate::constants::{H3_CELL_MODE, H3_INIT, MAX_FACE_COORD, NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::h3_index::{_set_base_cell, _set_mode, _set_resolution};
use crate::types::{CoordIJK, Direction, FaceIJK, H3Index};

const NUM_CELLS: usize = NUM_BASE_CELLS as usize;

/// Marks a deleted neighbor direction of a pentagon.
pub(crate) const INVALID_BASE_CELL: u8 = 127;

/// Home placement of one base cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BaseCellData {
  /// Home face and resolution 0 coordinate on it.
  pub home_fijk: FaceIJK,
  pub is_pentagon: bool,
  /// Faces on which a pentagon's coordinate frame is clockwise offset. `-1` is unused.
  pub cw_offset_pent: [i32; 2],
}

const fn hex(face: i32, c: [i32; 3]) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK::new(face, CoordIJK::new(c[0], c[1], c[2])),
    is_pentagon: false,
    cw_offset_pent: [0, 0],
  }
}

const fn pent(face: i32, c: [i32; 3], cw_offset_pent: [i32; 2]) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK::new(face, CoordIJK::new(c[0], c[1], c[2])),
    is_pentagon: true,
    cw_offset_pent,
  }
}

#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_CELLS] = [
  hex(1, [1, 0, 0]), hex(2, [1, 1, 0]), hex(1, [0, 0, 0]), hex(2, [1, 0, 0]), // 0
  pent(0, [2, 0, 0], [-1, -1]), hex(1, [1, 1, 0]), hex(1, [0, 0, 1]), hex(2, [0, 0, 0]), // 4
  hex(0, [1, 0, 0]), hex(2, [0, 1, 0]), hex(1, [0, 1, 0]), hex(1, [0, 1, 1]), // 8
  hex(3, [1, 0, 0]), hex(3, [1, 1, 0]), pent(11, [2, 0, 0], [2, 6]), hex(4, [1, 0, 0]), // 12
  hex(0, [0, 0, 0]), hex(6, [0, 1, 0]), hex(0, [0, 0, 1]), hex(2, [0, 1, 1]), // 16
  hex(7, [0, 0, 1]), hex(2, [0, 0, 1]), hex(0, [1, 1, 0]), hex(6, [0, 0, 1]), // 20
  pent(10, [2, 0, 0], [1, 5]), hex(6, [0, 0, 0]), hex(3, [0, 0, 0]), hex(11, [1, 0, 0]), // 24
  hex(4, [1, 1, 0]), hex(3, [0, 1, 0]), hex(0, [0, 1, 1]), hex(4, [0, 0, 0]), // 28
  hex(5, [0, 1, 0]), hex(0, [0, 1, 0]), hex(7, [0, 1, 0]), hex(11, [1, 1, 0]), // 32
  hex(7, [0, 0, 0]), hex(10, [1, 0, 0]), pent(12, [2, 0, 0], [3, 7]), hex(6, [1, 0, 1]), // 36
  hex(7, [1, 0, 1]), hex(4, [0, 0, 1]), hex(3, [0, 0, 1]), hex(3, [0, 1, 1]), // 40
  hex(4, [0, 1, 0]), hex(6, [1, 0, 0]), hex(11, [0, 0, 0]), hex(8, [0, 0, 1]), // 44
  hex(5, [0, 0, 1]), pent(14, [2, 0, 0], [0, 9]), hex(5, [0, 0, 0]), hex(12, [1, 0, 0]), // 48
  hex(10, [1, 1, 0]), hex(4, [0, 1, 1]), hex(12, [1, 1, 0]), hex(7, [1, 0, 0]), // 52
  hex(11, [0, 1, 0]), hex(10, [0, 0, 0]), pent(13, [2, 0, 0], [4, 8]), hex(10, [0, 0, 1]), // 56
  hex(11, [0, 0, 1]), hex(9, [0, 1, 0]), hex(8, [0, 1, 0]), pent(6, [2, 0, 0], [11, 15]), // 60
  hex(8, [0, 0, 0]), hex(9, [0, 0, 1]), hex(14, [1, 0, 0]), hex(5, [1, 0, 1]), // 64
  hex(16, [0, 1, 1]), hex(8, [1, 0, 1]), hex(5, [1, 0, 0]), hex(12, [0, 0, 0]), // 68
  pent(7, [2, 0, 0], [12, 16]), hex(12, [0, 1, 0]), hex(10, [0, 1, 0]), hex(9, [0, 0, 0]), // 72
  hex(13, [1, 0, 0]), hex(16, [0, 0, 1]), hex(15, [0, 1, 1]), hex(15, [0, 1, 0]), // 76
  hex(16, [0, 1, 0]), hex(14, [1, 1, 0]), hex(13, [1, 1, 0]), pent(5, [2, 0, 0], [10, 19]), // 80
  hex(8, [1, 0, 0]), hex(14, [0, 0, 0]), hex(9, [1, 0, 1]), hex(14, [0, 0, 1]), // 84
  hex(17, [0, 0, 1]), hex(12, [0, 0, 1]), hex(16, [0, 0, 0]), hex(17, [0, 1, 1]), // 88
  hex(15, [0, 0, 1]), hex(16, [1, 0, 1]), hex(9, [1, 0, 0]), hex(15, [0, 0, 0]), // 92
  hex(13, [0, 0, 0]), pent(8, [2, 0, 0], [13, 17]), hex(13, [0, 1, 0]), hex(17, [1, 0, 1]), // 96
  hex(19, [0, 1, 0]), hex(14, [0, 1, 0]), hex(19, [0, 1, 1]), hex(17, [0, 1, 0]), // 100
  hex(13, [0, 0, 1]), hex(17, [0, 0, 0]), hex(16, [1, 0, 0]), pent(9, [2, 0, 0], [14, 18]), // 104
  hex(15, [1, 0, 1]), hex(15, [1, 0, 0]), hex(18, [0, 1, 1]), hex(18, [0, 0, 1]), // 108
  hex(19, [0, 0, 1]), hex(17, [1, 0, 0]), hex(19, [0, 0, 0]), hex(18, [0, 1, 0]), // 112
  hex(18, [1, 0, 1]), pent(19, [2, 0, 0], [-1, -1]), hex(19, [1, 0, 0]), hex(18, [0, 0, 0]), // 116
  hex(19, [1, 0, 1]), hex(18, [1, 0, 0]), // 120
];

/// Neighboring base cell in each digit direction, `INVALID_BASE_CELL` where a pentagon has none.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[u8; 7]; NUM_CELLS] = [
  [  0,  1,  5,  2,  4,  3,  8], [  1,  7,  6,  9,  0,  3,  2], [  2,  6, 10, 11,  0,  1,  5], // 0
  [  3, 13,  1,  7,  4, 12,  0], [  4,127, 15,  8,  3,  0, 12], [  5,  2, 18, 10,  8,  0, 16], // 3
  [  6, 14, 11, 17,  1,  9,  2], [  7, 21,  9, 19,  3, 13,  1], [  8,  5, 22, 16,  4,  0, 15], // 6
  [  9, 19, 14, 20,  1,  7,  6], [ 10, 11, 24, 23,  5,  2, 18], [ 11, 17, 23, 25,  2,  6, 10], // 9
  [ 12, 28, 13, 26,  4, 15,  3], [ 13, 26, 21, 29,  3, 12,  7], [ 14,127, 17, 27,  9, 20,  6], // 12
  [ 15, 22, 28, 31,  4,  8, 12], [ 16, 18, 33, 30,  8,  5, 22], [ 17, 11, 14,  6, 35, 25, 27], // 15
  [ 18, 24, 30, 32,  5, 10, 16], [ 19, 34, 20, 36,  7, 21,  9], [ 20, 14, 19,  9, 40, 27, 36], // 18
  [ 21, 38, 19, 34, 13, 29,  7], [ 22, 16, 41, 33, 15,  8, 31], [ 23, 24, 11, 10, 39, 37, 25], // 21
  [ 24,127, 32, 37, 10, 23, 18], [ 25, 23, 17, 11, 45, 39, 35], [ 26, 42, 29, 43, 12, 28, 13], // 24
  [ 27, 40, 35, 46, 14, 20, 17], [ 28, 31, 42, 44, 12, 15, 26], [ 29, 43, 38, 47, 13, 26, 21], // 27
  [ 30, 32, 48, 50, 16, 18, 33], [ 31, 41, 44, 53, 15, 22, 28], [ 32, 30, 24, 18, 52, 50, 37], // 30
  [ 33, 30, 49, 48, 22, 16, 41], [ 34, 19, 38, 21, 54, 36, 51], [ 35, 46, 45, 56, 17, 27, 25], // 33
  [ 36, 20, 34, 19, 55, 40, 54], [ 37, 39, 52, 57, 24, 23, 32], [ 38,127, 34, 51, 29, 47, 21], // 36
  [ 39, 37, 25, 23, 59, 57, 45], [ 40, 27, 36, 20, 60, 46, 55], [ 41, 49, 53, 61, 22, 33, 31], // 39
  [ 42, 58, 43, 62, 28, 44, 26], [ 43, 62, 47, 64, 26, 42, 29], [ 44, 53, 58, 65, 28, 31, 42], // 42
  [ 45, 39, 35, 25, 63, 59, 56], [ 46, 60, 56, 68, 27, 40, 35], [ 47, 38, 43, 29, 69, 51, 64], // 45
  [ 48, 49, 30, 33, 67, 66, 50], [ 49,127, 61, 66, 33, 48, 41], [ 50, 48, 32, 30, 70, 67, 52], // 48
  [ 51, 69, 54, 71, 38, 47, 34], [ 52, 57, 70, 74, 32, 37, 50], [ 53, 61, 65, 75, 31, 41, 44], // 51
  [ 54, 71, 55, 73, 34, 51, 36], [ 55, 40, 54, 36, 72, 60, 73], [ 56, 68, 63, 77, 35, 46, 45], // 54
  [ 57, 59, 74, 78, 37, 39, 52], [ 58,127, 62, 76, 44, 65, 42], [ 59, 63, 78, 79, 39, 45, 57], // 57
  [ 60, 72, 68, 80, 40, 55, 46], [ 61, 53, 49, 41, 81, 75, 66], [ 62, 43, 58, 42, 82, 64, 76], // 60
  [ 63,127, 56, 45, 79, 59, 77], [ 64, 47, 62, 43, 84, 69, 82], [ 65, 58, 53, 44, 86, 76, 75], // 63
  [ 66, 67, 81, 85, 49, 48, 61], [ 67, 66, 50, 48, 87, 85, 70], [ 68, 56, 60, 46, 90, 77, 80], // 66
  [ 69, 51, 64, 47, 89, 71, 84], [ 70, 67, 52, 50, 83, 87, 74], [ 71, 89, 73, 91, 51, 69, 54], // 69
  [ 72,127, 73, 55, 80, 60, 88], [ 73, 91, 72, 88, 54, 71, 55], [ 74, 78, 83, 92, 52, 57, 70], // 72
  [ 75, 65, 61, 53, 94, 86, 81], [ 76, 86, 82, 96, 58, 65, 62], [ 77, 63, 68, 56, 93, 79, 90], // 75
  [ 78, 74, 59, 57, 95, 92, 79], [ 79, 78, 63, 59, 93, 95, 77], [ 80, 68, 72, 60, 99, 90, 88], // 78
  [ 81, 85, 94,101, 61, 66, 75], [ 82, 96, 84, 98, 62, 76, 64], [ 83,127, 74, 70,100, 87, 92], // 81
  [ 84, 69, 82, 64, 97, 89, 98], [ 85, 87,101,102, 66, 67, 81], [ 86, 76, 75, 65,104, 96, 94], // 84
  [ 87, 83,102,100, 67, 70, 85], [ 88, 72, 91, 73, 99, 80,105], [ 89, 97, 91,103, 69, 84, 71], // 87
  [ 90, 77, 80, 68,106, 93, 99], [ 91, 73, 89, 71,105, 88,103], [ 92, 83, 78, 74,108,100, 95], // 90
  [ 93, 79, 90, 77,109, 95,106], [ 94, 86, 81, 75,107,104,101], [ 95, 92, 79, 78,109,108, 93], // 93
  [ 96,104, 98,110, 76, 86, 82], [ 97,127, 98, 84,103, 89,111], [ 98,110, 97,111, 82, 96, 84], // 96
  [ 99, 80,105, 88,106, 90,113], [100,102, 83, 87,108,114, 92], [101,102,107,112, 81, 85, 94], // 99
  [102,101, 87, 85,114,112,100], [103, 91, 97, 89,116,105,111], [104,107,110,115, 86, 94, 96], // 102
  [105, 88,103, 91,113, 99,116], [106, 93, 99, 90,117,109,113], [107,127,101, 94,115,104,112], // 105
  [108,100, 95, 92,118,114,109], [109,108, 93, 95,117,118,106], [110, 98,104, 96,119,111,115], // 108
  [111, 97,110, 98,116,103,119], [112,107,102,101,120,115,114], [113, 99,116,105,117,106,121], // 111
  [114,112,100,102,118,120,108], [115,110,107,104,120,119,112], [116,103,119,111,113,105,121], // 114
  [117,127,109,118,113,121,106], [118,120,108,114,117,121,109], [119,111,115,110,121,116,120], // 117
  [120,115,114,112,121,119,118], [121,116,120,119,117,113,118], // 120
];

/// 60 degree ccw rotations into the neighbor's frame, per digit direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i8; 7]; NUM_CELLS] = [
  [ 0, 5, 0, 0, 1, 5, 1], [ 0, 0, 1, 0, 1, 0, 1], [ 0, 0, 0, 0, 0, 5, 0], [ 0, 5, 0, 0, 2, 5, 1], // 0
  [ 0,-1, 1, 0, 3, 4, 2], [ 0, 0, 1, 0, 1, 0, 1], [ 0, 0, 0, 3, 5, 5, 0], [ 0, 0, 0, 0, 0, 5, 0], // 4
  [ 0, 5, 0, 0, 0, 5, 1], [ 0, 0, 1, 3, 0, 0, 1], [ 0, 0, 1, 3, 0, 0, 1], [ 0, 3, 3, 3, 0, 0, 0], // 8
  [ 0, 5, 0, 0, 3, 5, 1], [ 0, 0, 1, 0, 1, 0, 1], [ 0,-1, 3, 0, 5, 2, 0], [ 0, 5, 0, 0, 4, 5, 1], // 12
  [ 0, 0, 0, 0, 0, 5, 0], [ 0, 3, 3, 3, 3, 0, 3], [ 0, 0, 0, 3, 5, 5, 0], [ 0, 3, 3, 3, 0, 0, 0], // 16
  [ 0, 3, 3, 3, 0, 3, 0], [ 0, 0, 0, 3, 5, 5, 0], [ 0, 0, 1, 0, 1, 0, 1], [ 0, 3, 3, 3, 0, 3, 0], // 20
  [ 0,-1, 3, 0, 5, 2, 0], [ 0, 0, 0, 3, 0, 0, 3], [ 0, 0, 0, 0, 0, 5, 0], [ 0, 3, 0, 0, 0, 3, 3], // 24
  [ 0, 0, 1, 0, 1, 0, 1], [ 0, 0, 1, 3, 0, 0, 1], [ 0, 3, 3, 3, 0, 0, 0], [ 0, 0, 0, 0, 0, 5, 0], // 28
  [ 0, 3, 3, 3, 3, 0, 3], [ 0, 0, 1, 3, 0, 0, 1], [ 0, 3, 3, 3, 3, 0, 3], [ 0, 0, 3, 0, 3, 0, 3], // 32
  [ 0, 0, 0, 3, 0, 0, 3], [ 0, 3, 0, 0, 0, 3, 3], [ 0,-1, 3, 0, 5, 2, 0], [ 0, 3, 0, 0, 3, 3, 0], // 36
  [ 0, 3, 0, 0, 3, 3, 0], [ 0, 0, 0, 3, 5, 5, 0], [ 0, 0, 0, 3, 5, 5, 0], [ 0, 3, 3, 3, 0, 0, 0], // 40
  [ 0, 0, 1, 3, 0, 0, 1], [ 0, 0, 3, 0, 0, 3, 3], [ 0, 0, 0, 3, 0, 3, 0], [ 0, 3, 3, 3, 0, 3, 0], // 44
  [ 0, 3, 3, 3, 0, 3, 0], [ 0,-1, 3, 0, 5, 2, 0], [ 0, 0, 0, 3, 0, 0, 3], [ 0, 3, 0, 0, 0, 3, 3], // 48
  [ 0, 0, 3, 0, 3, 0, 3], [ 0, 3, 3, 3, 0, 0, 0], [ 0, 0, 3, 0, 3, 0, 3], [ 0, 0, 3, 0, 0, 3, 3], // 52
  [ 0, 3, 3, 3, 0, 0, 3], [ 0, 0, 0, 3, 0, 3, 0], [ 0,-1, 3, 0, 5, 2, 0], [ 0, 3, 3, 3, 3, 3, 0], // 56
  [ 0, 3, 3, 3, 3, 3, 0], [ 0, 3, 3, 3, 3, 0, 3], [ 0, 3, 3, 3, 3, 0, 3], [ 0,-1, 3, 0, 5, 2, 0], // 60
  [ 0, 0, 0, 3, 0, 0, 3], [ 0, 3, 3, 3, 0, 3, 0], [ 0, 3, 0, 0, 0, 3, 3], [ 0, 3, 0, 0, 3, 3, 0], // 64
  [ 0, 3, 3, 3, 0, 0, 0], [ 0, 3, 0, 0, 3, 3, 0], [ 0, 0, 3, 0, 0, 3, 3], [ 0, 0, 0, 3, 0, 3, 0], // 68
  [ 0,-1, 3, 0, 5, 2, 0], [ 0, 3, 3, 3, 0, 0, 3], [ 0, 3, 3, 3, 0, 0, 3], [ 0, 0, 0, 3, 0, 0, 3], // 72
  [ 0, 3, 0, 0, 0, 3, 3], [ 0, 0, 0, 3, 0, 5, 0], [ 0, 3, 3, 3, 0, 0, 0], [ 0, 0, 1, 3, 1, 0, 1], // 76
  [ 0, 0, 1, 3, 1, 0, 1], [ 0, 0, 3, 0, 3, 0, 3], [ 0, 0, 3, 0, 3, 0, 3], [ 0,-1, 3, 0, 5, 2, 0], // 80
  [ 0, 0, 3, 0, 0, 3, 3], [ 0, 0, 0, 3, 0, 3, 0], [ 0, 3, 0, 0, 3, 3, 0], [ 0, 3, 3, 3, 3, 3, 0], // 84
  [ 0, 0, 0, 3, 0, 5, 0], [ 0, 3, 3, 3, 3, 3, 0], [ 0, 0, 0, 0, 0, 0, 1], [ 0, 3, 3, 3, 0, 0, 0], // 88
  [ 0, 0, 0, 3, 0, 5, 0], [ 0, 5, 0, 0, 5, 5, 0], [ 0, 0, 3, 0, 0, 3, 3], [ 0, 0, 0, 0, 0, 0, 1], // 92
  [ 0, 0, 0, 3, 0, 3, 0], [ 0,-1, 3, 0, 5, 2, 0], [ 0, 3, 3, 3, 0, 0, 3], [ 0, 5, 0, 0, 5, 5, 0], // 96
  [ 0, 0, 1, 3, 1, 0, 1], [ 0, 3, 3, 3, 0, 0, 3], [ 0, 3, 3, 3, 0, 0, 0], [ 0, 0, 1, 3, 1, 0, 1], // 100
  [ 0, 3, 3, 3, 3, 3, 0], [ 0, 0, 0, 0, 0, 0, 1], [ 0, 0, 1, 0, 3, 5, 1], [ 0,-1, 3, 0, 5, 2, 0], // 104
  [ 0, 5, 0, 0, 5, 5, 0], [ 0, 0, 1, 0, 4, 5, 1], [ 0, 3, 3, 3, 0, 0, 0], [ 0, 0, 0, 3, 0, 5, 0], // 108
  [ 0, 0, 0, 3, 0, 5, 0], [ 0, 0, 1, 0, 2, 5, 1], [ 0, 0, 0, 0, 0, 0, 1], [ 0, 0, 1, 3, 1, 0, 1], // 112
  [ 0, 5, 0, 0, 5, 5, 0], [ 0,-1, 1, 0, 3, 4, 2], [ 0, 0, 1, 0, 0, 5, 1], [ 0, 0, 0, 0, 0, 0, 1], // 116
  [ 0, 5, 0, 0, 5, 5, 0], [ 0, 0, 1, 0, 1, 5, 1], // 120
];

/// `(base cell, ccw rotations)` for every resolution 0 coordinate of every face,
/// flattened as `i * 9 + j * 3 + k`.
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [[(u8, u8); 27]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [
    ( 16,0), ( 18,0), ( 24,0), ( 33,0), ( 30,0), ( 32,3), ( 49,1), ( 48,3), ( 50,3),
    (  8,0), (  5,5), ( 10,5), ( 22,0), ( 16,0), ( 18,0), ( 41,1), ( 33,0), ( 30,0),
    (  4,0), (  0,5), (  2,5), ( 15,1), (  8,0), (  5,5), ( 31,1), ( 22,0), ( 16,0),
  ],
  // face 1
  [
    (  2,0), (  6,0), ( 14,0), ( 10,0), ( 11,0), ( 17,3), ( 24,1), ( 23,3), ( 25,3),
    (  0,0), (  1,5), (  9,5), (  5,0), (  2,0), (  6,0), ( 18,1), ( 10,0), ( 11,0),
    (  4,1), (  3,5), (  7,5), (  8,1), (  0,0), (  1,5), ( 16,1), (  5,0), (  2,0),
  ],
  // face 2
  [
    (  7,0), ( 21,0), ( 38,0), (  9,0), ( 19,0), ( 34,3), ( 14,1), ( 20,3), ( 36,3),
    (  3,0), ( 13,5), ( 29,5), (  1,0), (  7,0), ( 21,0), (  6,1), (  9,0), ( 19,0),
    (  4,2), ( 12,5), ( 26,5), (  0,1), (  3,0), ( 13,5), (  2,1), (  1,0), (  7,0),
  ],
  // face 3
  [
    ( 26,0), ( 42,0), ( 58,0), ( 29,0), ( 43,0), ( 62,3), ( 38,1), ( 47,3), ( 64,3),
    ( 12,0), ( 28,5), ( 44,5), ( 13,0), ( 26,0), ( 42,0), ( 21,1), ( 29,0), ( 43,0),
    (  4,3), ( 15,5), ( 31,5), (  3,1), ( 12,0), ( 28,5), (  7,1), ( 13,0), ( 26,0),
  ],
  // face 4
  [
    ( 31,0), ( 41,0), ( 49,0), ( 44,0), ( 53,0), ( 61,3), ( 58,1), ( 65,3), ( 75,3),
    ( 15,0), ( 22,5), ( 33,5), ( 28,0), ( 31,0), ( 41,0), ( 42,1), ( 44,0), ( 53,0),
    (  4,4), (  8,5), ( 16,5), ( 12,1), ( 15,0), ( 22,5), ( 26,1), ( 28,0), ( 31,0),
  ],
  // face 5
  [
    ( 50,0), ( 48,0), ( 49,3), ( 32,0), ( 30,3), ( 33,3), ( 24,3), ( 18,3), ( 16,3),
    ( 70,0), ( 67,0), ( 66,3), ( 52,3), ( 50,0), ( 48,0), ( 37,3), ( 32,0), ( 30,3),
    ( 83,0), ( 87,3), ( 85,3), ( 74,3), ( 70,0), ( 67,0), ( 57,1), ( 52,3), ( 50,0),
  ],
  // face 6
  [
    ( 25,0), ( 23,0), ( 24,3), ( 17,0), ( 11,3), ( 10,3), ( 14,3), (  6,3), (  2,3),
    ( 45,0), ( 39,0), ( 37,3), ( 35,3), ( 25,0), ( 23,0), ( 27,3), ( 17,0), ( 11,3),
    ( 63,0), ( 59,3), ( 57,3), ( 56,3), ( 45,0), ( 39,0), ( 46,3), ( 35,3), ( 25,0),
  ],
  // face 7
  [
    ( 36,0), ( 20,0), ( 14,3), ( 34,0), ( 19,3), (  9,3), ( 38,3), ( 21,3), (  7,3),
    ( 55,0), ( 40,0), ( 27,3), ( 54,3), ( 36,0), ( 20,0), ( 51,3), ( 34,0), ( 19,3),
    ( 72,0), ( 60,3), ( 46,3), ( 73,3), ( 55,0), ( 40,0), ( 71,3), ( 54,3), ( 36,0),
  ],
  // face 8
  [
    ( 64,0), ( 47,0), ( 38,3), ( 62,0), ( 43,3), ( 29,3), ( 58,3), ( 42,3), ( 26,3),
    ( 84,0), ( 69,0), ( 51,3), ( 82,3), ( 64,0), ( 47,0), ( 76,3), ( 62,0), ( 43,3),
    ( 97,0), ( 89,3), ( 71,3), ( 98,3), ( 84,0), ( 69,0), ( 96,3), ( 82,3), ( 64,0),
  ],
  // face 9
  [
    ( 75,0), ( 65,0), ( 58,3), ( 61,0), ( 53,3), ( 44,3), ( 49,3), ( 41,3), ( 31,3),
    ( 94,0), ( 86,0), ( 76,3), ( 81,3), ( 75,0), ( 65,0), ( 66,3), ( 61,0), ( 53,3),
    (107,0), (104,3), ( 96,3), (101,3), ( 94,0), ( 86,0), ( 85,3), ( 81,3), ( 75,0),
  ],
  // face 10
  [
    ( 57,0), ( 59,0), ( 63,3), ( 74,0), ( 78,3), ( 79,3), ( 83,3), ( 92,3), ( 95,3),
    ( 37,0), ( 39,3), ( 45,3), ( 52,0), ( 57,0), ( 59,0), ( 70,3), ( 74,0), ( 78,3),
    ( 24,0), ( 23,3), ( 25,3), ( 32,3), ( 37,0), ( 39,3), ( 50,3), ( 52,0), ( 57,0),
  ],
  // face 11
  [
    ( 46,0), ( 60,0), ( 72,3), ( 56,0), ( 68,3), ( 80,3), ( 63,3), ( 77,3), ( 90,3),
    ( 27,0), ( 40,3), ( 55,3), ( 35,0), ( 46,0), ( 60,0), ( 45,3), ( 56,0), ( 68,3),
    ( 14,0), ( 20,3), ( 36,3), ( 17,3), ( 27,0), ( 40,3), ( 25,3), ( 35,0), ( 46,0),
  ],
  // face 12
  [
    ( 71,0), ( 89,0), ( 97,3), ( 73,0), ( 91,3), (103,3), ( 72,3), ( 88,3), (105,3),
    ( 51,0), ( 69,3), ( 84,3), ( 54,0), ( 71,0), ( 89,0), ( 55,3), ( 73,0), ( 91,3),
    ( 38,0), ( 47,3), ( 64,3), ( 34,3), ( 51,0), ( 69,3), ( 36,3), ( 54,0), ( 71,0),
  ],
  // face 13
  [
    ( 96,0), (104,0), (107,3), ( 98,0), (110,3), (115,3), ( 97,3), (111,3), (119,3),
    ( 76,0), ( 86,3), ( 94,3), ( 82,0), ( 96,0), (104,0), ( 84,3), ( 98,0), (110,3),
    ( 58,0), ( 65,3), ( 75,3), ( 62,3), ( 76,0), ( 86,3), ( 64,3), ( 82,0), ( 96,0),
  ],
  // face 14
  [
    ( 85,0), ( 87,0), ( 83,3), (101,0), (102,3), (100,3), (107,3), (112,3), (114,3),
    ( 66,0), ( 67,3), ( 70,3), ( 81,0), ( 85,0), ( 87,0), ( 94,3), (101,0), (102,3),
    ( 49,0), ( 48,3), ( 50,3), ( 61,3), ( 66,0), ( 67,3), ( 75,3), ( 81,0), ( 85,0),
  ],
  // face 15
  [
    ( 95,0), ( 92,0), ( 83,0), ( 79,0), ( 78,0), ( 74,3), ( 63,1), ( 59,3), ( 57,3),
    (109,0), (108,0), (100,5), ( 93,1), ( 95,0), ( 92,0), ( 77,1), ( 79,0), ( 78,0),
    (117,4), (118,5), (114,5), (106,1), (109,0), (108,0), ( 90,1), ( 93,1), ( 95,0),
  ],
  // face 16
  [
    ( 90,0), ( 77,0), ( 63,0), ( 80,0), ( 68,0), ( 56,3), ( 72,1), ( 60,3), ( 46,3),
    (106,0), ( 93,0), ( 79,5), ( 99,1), ( 90,0), ( 77,0), ( 88,1), ( 80,0), ( 68,0),
    (117,3), (109,5), ( 95,5), (113,1), (106,0), ( 93,0), (105,1), ( 99,1), ( 90,0),
  ],
  // face 17
  [
    (105,0), ( 88,0), ( 72,0), (103,0), ( 91,0), ( 73,3), ( 97,1), ( 89,3), ( 71,3),
    (113,0), ( 99,0), ( 80,5), (116,1), (105,0), ( 88,0), (111,1), (103,0), ( 91,0),
    (117,2), (106,5), ( 90,5), (121,1), (113,0), ( 99,0), (119,1), (116,1), (105,0),
  ],
  // face 18
  [
    (119,0), (111,0), ( 97,0), (115,0), (110,0), ( 98,3), (107,1), (104,3), ( 96,3),
    (121,0), (116,0), (103,5), (120,1), (119,0), (111,0), (112,1), (115,0), (110,0),
    (117,1), (113,5), (105,5), (118,1), (121,0), (116,0), (114,1), (120,1), (119,0),
  ],
  // face 19
  [
    (114,0), (112,0), (107,0), (100,0), (102,0), (101,3), ( 83,1), ( 87,3), ( 85,3),
    (118,0), (120,0), (115,5), (108,1), (114,0), (112,0), ( 92,1), (100,0), (102,0),
    (117,0), (121,5), (119,5), (109,1), (118,0), (120,0), ( 95,1), (108,1), (114,0),
  ],
];

/// Base cell and the rotation into its frame found at a face coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BaseCellRotation {
  pub base_cell: i32,
  pub ccw_rot60: i32,
}

#[inline]
fn _in_range(base_cell: i32) -> bool {
  (0..NUM_BASE_CELLS).contains(&base_cell)
}

#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  _in_range(base_cell) && BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Pentagons sitting on the poles, where every neighbor is oriented toward them.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

#[inline]
#[must_use]
pub(crate) fn _base_cell_home(base_cell: i32) -> Option<FaceIJK> {
  _in_range(base_cell).then(|| BASE_CELL_DATA[base_cell as usize].home_fijk)
}

/// Base cell at a resolution 0 face coordinate. `None` when any axis exceeds the face.
#[must_use]
pub(crate) fn _face_ijk_to_base_cell(h: &FaceIJK) -> Option<BaseCellRotation> {
  let c = &h.coord;
  let axes_ok = [c.i, c.j, c.k].iter().all(|v| (0..=MAX_FACE_COORD).contains(v));
  if !axes_ok || !(0..NUM_ICOSA_FACES).contains(&h.face) {
    return None;
  }
  let (bc, rot) = FACE_IJK_BASE_CELLS[h.face as usize][(c.i * 9 + c.j * 3 + c.k) as usize];
  Some(BaseCellRotation {
    base_cell: i32::from(bc),
    ccw_rot60: i32::from(rot),
  })
}

/// Rotations of `base_cell`'s frame as seen from `face`, or `None` if it does not touch that face.
#[must_use]
pub(crate) fn _base_cell_to_ccwrot60(base_cell: i32, face: i32) -> Option<i32> {
  if !(0..NUM_ICOSA_FACES).contains(&face) || !_in_range(base_cell) {
    return None;
  }
  FACE_IJK_BASE_CELLS[face as usize]
    .iter()
    .find(|(bc, _)| i32::from(*bc) == base_cell)
    .map(|(_, rot)| i32::from(*rot))
}

#[inline]
#[must_use]
pub(crate) fn _base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if !_in_range(base_cell) {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  test_face >= 0 && data.is_pentagon && data.cw_offset_pent.contains(&test_face)
}

/// Neighbor of `base_cell` in direction `dir`. `None` for the deleted pentagon direction.
#[inline]
#[must_use]
pub(crate) fn _get_base_cell_neighbor(base_cell: i32, dir: Direction) -> Option<i32> {
  if !_in_range(base_cell) || dir == Direction::InvalidDigit {
    return None;
  }
  match BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize] {
    INVALID_BASE_CELL => None,
    n => Some(i32::from(n)),
  }
}

#[inline]
#[must_use]
pub(crate) fn _base_cell_neighbor_rotations(base_cell: i32, dir: Direction) -> i32 {
  i32::from(BASE_CELL_NEIGHBOR_60CCW_ROTS[base_cell as usize][dir as usize])
}

/// Direction from `origin` to an adjacent base cell, `InvalidDigit` when they do not touch.
#[must_use]
pub(crate) fn _get_base_cell_direction(origin: i32, neighbor: i32) -> Direction {
  if !_in_range(origin) {
    return Direction::InvalidDigit;
  }
  std::iter::once(Direction::Center)
    .chain(Direction::NEIGHBORS)
    .find(|d| _get_base_cell_neighbor(origin, *d) == Some(neighbor))
    .unwrap_or(Direction::InvalidDigit)
}

/// Face lying in direction `dir` from a pentagon base cell.
///
/// Each pentagon touches five faces; the neighbor in each surviving direction is
/// homed on exactly that face.
#[must_use]
pub(crate) fn _pentagon_direction_face(base_cell: i32, dir: Direction) -> Option<i32> {
  if !_is_base_cell_pentagon(base_cell) {
    return None;
  }
  _get_base_cell_neighbor(base_cell, dir).map(|n| BASE_CELL_DATA[n as usize].home_fijk.face)
}

/// The resolution 0 cell with the given base cell number.
#[must_use]
pub(crate) fn _base_cell_num_to_cell(base_cell: i32) -> H3Index {
  let mut h = H3Index::new(H3_INIT);
  _set_mode(&mut h, H3_CELL_MODE);
  _set_resolution(&mut h, 0);
  _set_base_cell(&mut h, base_cell);
  h
}

/// Base cell numbers of the twelve pentagons, ascending.
pub(crate) fn _pentagon_base_cells() -> impl Iterator<Item = i32> {
  (0..NUM_BASE_CELLS).filter(|bc| _is_base_cell_pentagon(*bc))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_twelve_pentagons() {
    let pents: Vec<i32> = _pentagon_base_cells().collect();
    assert_eq!(pents, vec![4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117]);
    for bc in pents {
      assert!(BASE_CELL_NEIGHBORS[bc as usize][1] == INVALID_BASE_CELL, "pentagon {bc} has a K neighbor");
    }
  }

  #[test]
  fn test_home_face_lookup_round_trips() {
    for bc in 0..NUM_BASE_CELLS {
      let home = _base_cell_home(bc).unwrap();
      let found = _face_ijk_to_base_cell(&home).unwrap();
      assert_eq!(found.base_cell, bc);
      assert_eq!(found.ccw_rot60, 0, "base cell {bc} is unrotated on its home face");
    }
  }

  #[test]
  fn test_neighbors_are_symmetric() {
    for bc in 0..NUM_BASE_CELLS {
      assert_eq!(_get_base_cell_neighbor(bc, Direction::Center), Some(bc));
      for dir in Direction::NEIGHBORS {
        if let Some(n) = _get_base_cell_neighbor(bc, dir) {
          assert_ne!(_get_base_cell_direction(n, bc), Direction::InvalidDigit, "{bc} -> {n}");
        }
      }
    }
  }

  #[test]
  fn test_out_of_face_coordinate() {
    assert_eq!(_face_ijk_to_base_cell(&FaceIJK::new(0, CoordIJK::new(3, 0, 0))), None);
    assert_eq!(_face_ijk_to_base_cell(&FaceIJK::new(20, CoordIJK::new(0, 0, 0))), None);
  }

  #[test]
  fn test_ccw_rotations_on_face() {
    assert_eq!(_base_cell_to_ccwrot60(16, 0), Some(0));
    assert_eq!(_base_cell_to_ccwrot60(16, 19), None);
    assert_eq!(_base_cell_to_ccwrot60(4, 3), Some(3));
  }

  #[test]
  fn test_cw_offset() {
    assert!(_base_cell_is_cw_offset(14, 2));
    assert!(_base_cell_is_cw_offset(14, 6));
    assert!(!_base_cell_is_cw_offset(14, 11));
    assert!(!_base_cell_is_cw_offset(4, -1), "polar pentagons have no offset faces");
    assert!(!_base_cell_is_cw_offset(16, 0));
  }

  #[test]
  fn test_pentagon_direction_faces() {
    let faces: Vec<i32> = Direction::NEIGHBORS[1..]
      .iter()
      .filter_map(|d| _pentagon_direction_face(83, *d))
      .collect();
    assert_eq!(faces, vec![10, 5, 19, 14, 15]);
    assert_eq!(_pentagon_direction_face(83, Direction::KAxes), None);
    assert_eq!(_pentagon_direction_face(16, Direction::JAxes), None);
  }
}
