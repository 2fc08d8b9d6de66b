//! Face-centered IJK coordinates on the icosahedron: gnomonic projection to and
//! from the sphere, overage correction across face edges, and cell boundaries.

use tracing::{trace, warn};

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_OVERAGE_HOPS, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7,
  NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::coords::ijk::{
  _down_ap3, _down_ap3r, _down_ap7r, _hex2d_to_coord_ijk, _ijk_add, _ijk_normalize, _ijk_rotate60_ccw, _ijk_rotate60_cw,
  _ijk_scale, _ijk_sub, _ijk_to_hex2d,
};
use crate::error::H3Error;
use crate::h3_index::is_resolution_class_iii;
use crate::latlng::{_geo_az_distance_rads, _geo_azimuth_rads, _pos_angle_rads};
use crate::math::vec2d::{_v2d_almost_equals, _v2d_intersect, _v2d_mag};
use crate::math::vec3d::{_geo_to_vec3d, _point_square_dist};
use crate::types::{CellBoundary, CoordIJK, FaceIJK, LatLng, Vec2d, Vec3d};

// Quadrant indices into FACE_NEIGHBORS rows.
pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

const NUM_FACES: usize = NUM_ICOSA_FACES as usize;

/// Per-axis extent of a face at each Class II resolution.
#[rustfmt::skip]
const MAX_DIM_BY_CII_RES: [i32; 17] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Unit translation length at each Class II resolution.
#[rustfmt::skip]
const UNIT_SCALE_BY_CII_RES: [i32; 17] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

const fn ll(lat: f64, lng: f64) -> LatLng {
  LatLng { lat, lng }
}

const fn v3(x: f64, y: f64, z: f64) -> Vec3d {
  Vec3d { x, y, z }
}

/// Face centers in radians.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [LatLng; NUM_FACES] = [
  ll(0.80358264971898994, 1.248397419617396), // 0
  ll(1.3077478834556382, 2.536945009877921), // 1
  ll(1.054751253523952, -1.3475173589003966), // 2
  ll(0.6001915955381868, -0.45060390946975575), // 3
  ll(0.49171542819877387, 0.40198820291130694), // 4
  ll(0.1727453274156187, 1.6781468852804337), // 5
  ll(0.6059293215713507, 2.9539233298124116), // 6
  ll(0.42737051832897964, -1.8888762003362854), // 7
  ll(-0.07906611854921283, -0.73342951338086774), // 8
  ll(-0.23096164445538364, 0.506495587332349), // 9
  ll(0.07906611854921283, 2.4081631402089255), // 10
  ll(0.23096164445538364, -2.635097066257444), // 11
  ll(-0.1727453274156187, -1.4634457683093595), // 12
  ll(-0.6059293215713507, -0.18766932377738162), // 13
  ll(-0.42737051832897964, 1.252716453253508), // 14
  ll(-0.6001915955381868, 2.6909887441200375), // 15
  ll(-0.49171542819877387, -2.7396044506784863), // 16
  ll(-0.80358264971898994, -1.893195233972397), // 17
  ll(-1.3077478834556382, -0.6046476437118721), // 18
  ll(-1.054751253523952, 1.7940752946893966), // 19
];

/// Face centers on the unit sphere.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_FACES] = [
  v3(0.2199307791404606, 0.6583691780274996, 0.7198475378926182), // 0
  v3(-0.2139234834501421, 0.1478171829550703, 0.9656017935214205), // 1
  v3(0.1092625278784797, -0.481195157287321, 0.8697775121287253), // 2
  v3(0.7428567301586791, -0.3593941678278028, 0.5648005936517033), // 3
  v3(0.8112534709140969, 0.3448953237639384, 0.472138773641393), // 4
  v3(-0.1055498149613921, 0.9794457296411413, 0.1718874610009365), // 5
  v3(-0.8075407579970092, 0.1533552485898818, 0.5695261994882688), // 6
  v3(-0.2846148069787907, -0.8644080972654206, 0.414479255247354), // 7
  v3(0.7405621473854482, -0.6673299564565524, -0.07898376463267377), // 8
  v3(0.8512303986474293, 0.4722343788582681, -0.2289137388687808), // 9
  v3(-0.7405621473854481, 0.6673299564565524, 0.07898376463267377), // 10
  v3(-0.8512303986474292, -0.4722343788582682, 0.2289137388687808), // 11
  v3(0.1055498149613919, -0.9794457296411413, -0.1718874610009365), // 12
  v3(0.8075407579970092, -0.1533552485898819, -0.5695261994882688), // 13
  v3(0.2846148069787908, 0.8644080972654204, -0.414479255247354), // 14
  v3(-0.7428567301586791, 0.3593941678278027, -0.5648005936517033), // 15
  v3(-0.8112534709140971, -0.3448953237639382, -0.472138773641393), // 16
  v3(-0.2199307791404607, -0.6583691780274996, -0.7198475378926182), // 17
  v3(0.213923483450142, -0.1478171829550704, -0.9656017935214205), // 18
  v3(-0.1092625278784796, 0.481195157287321, -0.8697775121287253), // 19
];

/// Azimuth from each face center to its vertices 0, 1 and 2; these are the Class II i, j, k axes.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_FACES] = [
  [5.61995826852394, 3.5255631661307445, 1.4311680637375487], // 0
  [5.760339081714187, 3.6659439793209917, 1.571548876927796], // 1
  [0.7802136543934301, 4.969003859179821, 2.8746087567866257], // 2
  [0.4304693639799999, 4.619259568766391, 2.5248644663731955], // 3
  [6.130269123335111, 4.035874020941916, 1.9414789185487203], // 4
  [2.692877706530643, 0.5984826041374471, 4.787272808923838], // 5
  [2.982963003477244, 0.8885679010840484, 5.07735810587044], // 6
  [3.532912002790141, 1.4385169003969457, 5.627307105183337], // 7
  [3.494305004259568, 1.3999099018663729, 5.588700106652764], // 8
  [3.0032141694995384, 0.9088190671063429, 5.097609271892734], // 9
  [5.9304729565098116, 3.836077854116616, 1.7416827517234204], // 10
  [0.13837848409025485, 4.327168688876646, 2.23277358648345], // 11
  [0.44871494705915036, 4.6375051518455415, 2.543110049452346], // 12
  [0.15862965011254936, 4.34741985489894, 2.253024752505745], // 13
  [5.8918659579792385, 3.797470855586043, 1.7030757531928476], // 14
  [2.7111232896097933, 0.6167281872165978, 4.8055183920029887], // 15
  [3.294508837434268, 1.200113735041073, 5.388903939827464], // 16
  [3.80481969224544, 1.7104245898522445, 5.899214794638635], // 17
  [3.6644388790551924, 1.570043776661997, 5.758833981448388], // 18
  [2.361378999196363, 0.2669838968031676, 4.4557741015895586], // 19
];

/// How to carry a coordinate from one face frame into a neighboring face frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceOrientIJK {
  pub face: i32,
  /// Res 0 translation relative to the primary face.
  pub translate: CoordIJK,
  /// Number of 60 degree ccw rotations relative to the primary face.
  pub ccw_rot60: i32,
}

const fn o(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Neighboring faces in the order: self, IJ quadrant, KI quadrant, JK quadrant.
#[rustfmt::skip]
pub(crate) const FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_FACES] = [
  [o(0, 0, 0, 0, 0), o(4, 2, 0, 2, 1), o(1, 2, 2, 0, 5), o(5, 0, 2, 2, 3)], // 0
  [o(1, 0, 0, 0, 0), o(0, 2, 0, 2, 1), o(2, 2, 2, 0, 5), o(6, 0, 2, 2, 3)], // 1
  [o(2, 0, 0, 0, 0), o(1, 2, 0, 2, 1), o(3, 2, 2, 0, 5), o(7, 0, 2, 2, 3)], // 2
  [o(3, 0, 0, 0, 0), o(2, 2, 0, 2, 1), o(4, 2, 2, 0, 5), o(8, 0, 2, 2, 3)], // 3
  [o(4, 0, 0, 0, 0), o(3, 2, 0, 2, 1), o(0, 2, 2, 0, 5), o(9, 0, 2, 2, 3)], // 4
  [o(5, 0, 0, 0, 0), o(10, 2, 2, 0, 3), o(14, 2, 0, 2, 3), o(0, 0, 2, 2, 3)], // 5
  [o(6, 0, 0, 0, 0), o(11, 2, 2, 0, 3), o(10, 2, 0, 2, 3), o(1, 0, 2, 2, 3)], // 6
  [o(7, 0, 0, 0, 0), o(12, 2, 2, 0, 3), o(11, 2, 0, 2, 3), o(2, 0, 2, 2, 3)], // 7
  [o(8, 0, 0, 0, 0), o(13, 2, 2, 0, 3), o(12, 2, 0, 2, 3), o(3, 0, 2, 2, 3)], // 8
  [o(9, 0, 0, 0, 0), o(14, 2, 2, 0, 3), o(13, 2, 0, 2, 3), o(4, 0, 2, 2, 3)], // 9
  [o(10, 0, 0, 0, 0), o(5, 2, 2, 0, 3), o(6, 2, 0, 2, 3), o(15, 0, 2, 2, 3)], // 10
  [o(11, 0, 0, 0, 0), o(6, 2, 2, 0, 3), o(7, 2, 0, 2, 3), o(16, 0, 2, 2, 3)], // 11
  [o(12, 0, 0, 0, 0), o(7, 2, 2, 0, 3), o(8, 2, 0, 2, 3), o(17, 0, 2, 2, 3)], // 12
  [o(13, 0, 0, 0, 0), o(8, 2, 2, 0, 3), o(9, 2, 0, 2, 3), o(18, 0, 2, 2, 3)], // 13
  [o(14, 0, 0, 0, 0), o(9, 2, 2, 0, 3), o(5, 2, 0, 2, 3), o(19, 0, 2, 2, 3)], // 14
  [o(15, 0, 0, 0, 0), o(16, 2, 0, 2, 1), o(19, 2, 2, 0, 5), o(10, 0, 2, 2, 3)], // 15
  [o(16, 0, 0, 0, 0), o(17, 2, 0, 2, 1), o(15, 2, 2, 0, 5), o(11, 0, 2, 2, 3)], // 16
  [o(17, 0, 0, 0, 0), o(18, 2, 0, 2, 1), o(16, 2, 2, 0, 5), o(12, 0, 2, 2, 3)], // 17
  [o(18, 0, 0, 0, 0), o(19, 2, 0, 2, 1), o(17, 2, 2, 0, 5), o(13, 0, 2, 2, 3)], // 18
  [o(19, 0, 0, 0, 0), o(15, 2, 0, 2, 1), o(18, 2, 2, 0, 5), o(14, 0, 2, 2, 3)], // 19
];

const INVALID_QUADRANT: i8 = -1;

const fn _build_adjacent_face_dir() -> [[i8; NUM_FACES]; NUM_FACES] {
  let mut table = [[INVALID_QUADRANT; NUM_FACES]; NUM_FACES];
  let mut face = 0;
  while face < NUM_FACES {
    let mut quadrant = 0;
    while quadrant < 4 {
      table[face][FACE_NEIGHBORS[face][quadrant].face as usize] = quadrant as i8;
      quadrant += 1;
    }
    face += 1;
  }
  table
}

/// Quadrant of `FACE_NEIGHBORS[a]` that leads to face `b`, or -1 when not adjacent.
pub(crate) static ADJACENT_FACE_DIR: [[i8; NUM_FACES]; NUM_FACES] = _build_adjacent_face_dir();

/// Quadrant leading from face `from` to face `to`, if the faces touch.
#[inline]
pub(crate) fn _adjacent_face_dir(from: i32, to: i32) -> Option<usize> {
  let dir = ADJACENT_FACE_DIR[from as usize][to as usize];
  usize::try_from(dir).ok()
}

/// Where a coordinate ended up relative to its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Inside the face.
  NoOverage,
  /// On a face edge. Only reported for substrate grids.
  FaceEdge,
  /// Crossed onto an adjacent face and was re-expressed there.
  NewFace,
}

/// Closest face to `g` by squared chord distance to the face centers.
///
/// Faces are scanned in ascending order with a strict comparison, so an exact
/// tie resolves to the lowest face number.
#[must_use]
pub(crate) fn _geo_to_closest_face(g: &LatLng) -> (i32, f64) {
  let v3d = _geo_to_vec3d(g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = _point_square_dist(center, &v3d);
    if d < sqd {
      face = f as i32;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Face and planar hex2d position of `g` at resolution `res`.
#[must_use]
pub(crate) fn _geo_to_hex2d(g: &LatLng, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = _geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - sqd / 2
  let mut r = (1.0 - sqd * 0.5).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let f = face as usize;
  let mut theta =
    _pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - _pos_angle_rads(_geo_azimuth_rads(&FACE_CENTER_GEO[f], g)));
  if is_resolution_class_iii(res) {
    theta = _pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }
  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Geographic position of a planar hex2d point on `face`.
///
/// `substrate` marks points on the aperture 3 vertex grid, which are already
/// expressed in Class II axes.
#[must_use]
pub(crate) fn _hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> LatLng {
  let f = face as usize;
  let mut r = _v2d_mag(v);
  if r < EPSILON {
    return FACE_CENTER_GEO[f];
  }

  let mut theta = v.y.atan2(v.x);
  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_resolution_class_iii(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_resolution_class_iii(res) {
    theta = _pos_angle_rads(theta + M_AP7_ROT_RADS);
  }
  theta = _pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - theta);

  _geo_az_distance_rads(&FACE_CENTER_GEO[f], theta, r)
}

/// Face and IJK coordinate containing `g` at resolution `res`.
#[must_use]
pub(crate) fn _geo_to_face_ijk(g: &LatLng, res: i32) -> FaceIJK {
  let (face, v) = _geo_to_hex2d(g, res);
  FaceIJK::new(face, _hex2d_to_coord_ijk(&v))
}

/// Geographic center of a face IJK cell.
#[must_use]
pub(crate) fn _face_ijk_to_geo(h: &FaceIJK, res: i32) -> LatLng {
  _hex2d_to_geo(&_ijk_to_hex2d(&h.coord), h.face, res, false)
}

/// Classifies `fijk` against its face at Class II resolution `res` and, when it
/// has crossed a face edge, re-expresses it on the adjacent face.
///
/// `pent_leading_4` applies the rotation that skips the deleted pentagon
/// sub-sequence. `substrate` selects the aperture 3 vertex grid.
#[must_use]
pub(crate) fn _adjust_overage_class_ii(
  fijk: &FaceIJK,
  res: i32,
  pent_leading_4: bool,
  substrate: bool,
) -> (FaceIJK, Overage) {
  let mut out = *fijk;
  let ijk = &mut out.coord;

  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let sum = ijk.i + ijk.j + ijk.k;
  if substrate && sum == max_dim {
    return (out, Overage::FaceEdge);
  }
  if sum <= max_dim {
    return (out, Overage::NoOverage);
  }

  let quadrant = if ijk.k > 0 {
    if ijk.j > 0 {
      JK_QUADRANT
    } else {
      if pent_leading_4 {
        // rotate about the pentagon center to skip the missing sequence
        let origin = CoordIJK::new(max_dim, 0, 0);
        let mut tmp = _ijk_sub(ijk, &origin);
        _ijk_rotate60_cw(&mut tmp);
        *ijk = _ijk_add(&tmp, &origin);
      }
      KI_QUADRANT
    }
  } else {
    IJ_QUADRANT
  };

  let orient = &FACE_NEIGHBORS[fijk.face as usize][quadrant];
  for _ in 0..orient.ccw_rot60 {
    _ijk_rotate60_ccw(ijk);
  }

  let mut trans = orient.translate;
  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    unit_scale *= 3;
  }
  _ijk_scale(&mut trans, unit_scale);
  *ijk = _ijk_add(ijk, &trans);
  _ijk_normalize(ijk);

  out.face = orient.face;
  trace!(from = fijk.face, to = out.face, res, substrate, "face overage");

  // points on pentagon boundaries can land on an edge of the new face
  if substrate && ijk.i + ijk.j + ijk.k == max_dim {
    return (out, Overage::FaceEdge);
  }
  (out, Overage::NewFace)
}

/// Re-applies overage correction while it keeps moving the coordinate to a
/// new face. This only cascades near pentagons, where a cell or vertex sits
/// next to an icosahedron vertex shared by five faces.
///
/// `hops` counts corrective face changes already made. The first crossing out of
/// the home face is not one of them.
pub(crate) fn _settle_overage(fijk: &FaceIJK, res: i32, substrate: bool, mut hops: usize) -> Result<(FaceIJK, Overage), H3Error> {
  let mut current = *fijk;
  loop {
    let (next, overage) = _adjust_overage_class_ii(&current, res, false, substrate);
    if overage != Overage::NewFace {
      return Ok((next, overage));
    }
    hops += 1;
    if hops > MAX_OVERAGE_HOPS {
      warn!(face = fijk.face, res, hops, "overage correction did not settle");
      return Err(H3Error::FaceOverageLoopExceeded);
    }
    current = next;
  }
}

/// Overage correction for a pentagon vertex on the substrate grid.
#[inline]
pub(crate) fn _adjust_pent_vert_overage(fijk: &FaceIJK, res: i32) -> Result<(FaceIJK, Overage), H3Error> {
  _settle_overage(fijk, res, true, 0)
}

/// Vertex offsets of an origin-centered hexagon on the aperture 33r substrate, ccw from the i axis.
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];

/// Same for Class III, on the aperture 33r7r substrate.
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

/// Substrate vertices of the cell centered at `fijk`. Returns the vertices and the
/// substrate resolution, which is one finer than `res` for Class III.
fn _substrate_verts<const N: usize>(fijk: &FaceIJK, res: i32) -> ([FaceIJK; N], i32) {
  let class_iii = is_resolution_class_iii(res);
  let offsets = if class_iii { &VERTS_CIII } else { &VERTS_CII };

  let mut center = fijk.coord;
  _down_ap3(&mut center);
  _down_ap3r(&mut center);
  let mut adj_res = res;
  if class_iii {
    _down_ap7r(&mut center);
    adj_res += 1;
  }

  let mut verts = [FaceIJK::default(); N];
  for (v, out) in verts.iter_mut().enumerate() {
    let mut coord = _ijk_add(&center, &offsets[v]);
    _ijk_normalize(&mut coord);
    *out = FaceIJK::new(fijk.face, coord);
  }
  (verts, adj_res)
}

#[inline]
pub(crate) fn _face_ijk_to_verts(fijk: &FaceIJK, res: i32) -> ([FaceIJK; NUM_HEX_VERTS], i32) {
  _substrate_verts::<NUM_HEX_VERTS>(fijk, res)
}

#[inline]
pub(crate) fn _face_ijk_pent_to_verts(fijk: &FaceIJK, res: i32) -> ([FaceIJK; NUM_PENT_VERTS], i32) {
  _substrate_verts::<NUM_PENT_VERTS>(fijk, res)
}

/// Endpoints of the icosahedron edge bounding `quadrant` on the substrate plane.
fn _icosa_edge(quadrant: usize, adj_res: i32) -> (Vec2d, Vec2d) {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize]);
  let v0 = Vec2d::new(3.0 * max_dim, 0.0);
  let v1 = Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim);
  let v2 = Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim);
  match quadrant {
    IJ_QUADRANT => (v0, v1),
    JK_QUADRANT => (v1, v2),
    _ => (v2, v0),
  }
}

/// Boundary of a hexagon, `length` topological vertices starting at `start`.
///
/// Class III edges crossing an icosahedron edge gain an extra vertex at the crossing.
#[must_use]
pub(crate) fn _face_ijk_to_cell_boundary(h: &FaceIJK, res: i32, start: usize, length: usize) -> CellBoundary {
  let (verts, adj_res) = _face_ijk_to_verts(h, res);
  let class_iii = is_resolution_class_iii(res);

  // walking the full loop needs one extra step for a crossing on the closing edge
  let extra = usize::from(length == NUM_HEX_VERTS);

  let mut boundary = CellBoundary::default();
  let mut last_face = -1;
  let mut last_overage = Overage::NoOverage;
  for vert in start..start + length + extra {
    let v = vert % NUM_HEX_VERTS;
    let (fijk, overage) = _adjust_overage_class_ii(&verts[v], adj_res, false, true);

    if class_iii && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
      let last_v = (v + 5) % NUM_HEX_VERTS;
      let orig0 = _ijk_to_hex2d(&verts[last_v].coord);
      let orig1 = _ijk_to_hex2d(&verts[v].coord);

      let face2 = if last_face == h.face { fijk.face } else { last_face };
      if let Some(quadrant) = _adjacent_face_dir(h.face, face2) {
        let (edge0, edge1) = _icosa_edge(quadrant, adj_res);
        let inter = _v2d_intersect(&orig0, &orig1, &edge0, &edge1);
        // a crossing exactly at a cell vertex needs no extra vertex
        if !_v2d_almost_equals(&orig0, &inter) && !_v2d_almost_equals(&orig1, &inter) {
          boundary.push(_hex2d_to_geo(&inter, h.face, adj_res, true));
        }
      }
    }

    if vert < start + NUM_HEX_VERTS {
      boundary.push(_hex2d_to_geo(&_ijk_to_hex2d(&fijk.coord), fijk.face, adj_res, true));
    }

    last_face = fijk.face;
    last_overage = overage;
  }
  boundary
}

/// Boundary of a pentagon, `length` topological vertices starting at `start`.
///
/// Every Class III pentagon edge crosses an icosahedron edge.
pub(crate) fn _face_ijk_pent_to_cell_boundary(
  h: &FaceIJK,
  res: i32,
  start: usize,
  length: usize,
) -> Result<CellBoundary, H3Error> {
  let (verts, adj_res) = _face_ijk_pent_to_verts(h, res);
  let class_iii = is_resolution_class_iii(res);
  let extra = usize::from(length == NUM_PENT_VERTS);

  let mut boundary = CellBoundary::default();
  let mut last_fijk = FaceIJK::default();
  for vert in start..start + length + extra {
    let v = vert % NUM_PENT_VERTS;
    let (fijk, _) = _adjust_pent_vert_overage(&verts[v], adj_res)?;

    if class_iii && vert > start {
      // express the current vertex in the frame of the last vertex's face
      if let Some(to_last) = _adjacent_face_dir(fijk.face, last_fijk.face) {
        let orient = &FACE_NEIGHBORS[fijk.face as usize][to_last];
        let mut ijk = fijk.coord;
        for _ in 0..orient.ccw_rot60 {
          _ijk_rotate60_ccw(&mut ijk);
        }
        let mut trans = orient.translate;
        _ijk_scale(&mut trans, UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
        ijk = _ijk_add(&ijk, &trans);
        _ijk_normalize(&mut ijk);

        let orig0 = _ijk_to_hex2d(&last_fijk.coord);
        let orig1 = _ijk_to_hex2d(&ijk);
        if let Some(quadrant) = _adjacent_face_dir(orient.face, fijk.face) {
          let (edge0, edge1) = _icosa_edge(quadrant, adj_res);
          let inter = _v2d_intersect(&orig0, &orig1, &edge0, &edge1);
          boundary.push(_hex2d_to_geo(&inter, orient.face, adj_res, true));
        }
      }
    }

    if vert < start + NUM_PENT_VERTS {
      boundary.push(_hex2d_to_geo(&_ijk_to_hex2d(&fijk.coord), fijk.face, adj_res, true));
    }
    last_fijk = fijk;
  }
  Ok(boundary)
}
