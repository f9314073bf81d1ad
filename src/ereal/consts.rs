use super::*;

impl<
  const N: usize,
> Ereal<N> {
  /// Zero.
  pub const ZERO: Self = Self { limbs: [0.0; N], len: 0 };

  /// One.
  pub const ONE: Self = Self::single(1.0);

  /// Negative one.
  pub const MINUS_ONE: Self = Self::single(-1.0);

  /// Not a Number.
  pub const NAN: Self = Self::single(f64::NAN);

  /// Positive infinity.
  pub const INFINITY: Self = Self::single(f64::INFINITY);

  /// Negative infinity.
  pub const NEG_INFINITY: Self = Self::single(f64::NEG_INFINITY);

  /// Round one of the tables below to `N` limbs.
  fn from_table(table: &[f64]) -> Self {
    // One limb beyond `N`, so that the last one is correctly rounded.
    let used = &table[.. table.len().min(N + 1)];
    let mut limbs = [0.0; TABLE_LIMBS];
    for (dst, &src) in limbs.iter_mut().zip(used.iter().rev()) {
      *dst = src
    }
    Self::from_expansion(&limbs[.. used.len()])
  }

  /// Archimedes' constant, π.
  pub fn pi() -> Self {
    Self::from_table(&PI)
  }

  /// π/2.
  pub fn half_pi() -> Self {
    Self::pi().ldexp(-1)
  }

  /// Euler's number, e.
  pub fn e() -> Self {
    Self::from_table(&E)
  }

  /// ln(2).
  pub fn ln2() -> Self {
    Self::from_table(&LN_2)
  }

  /// ln(10).
  pub fn ln10() -> Self {
    Self::from_table(&LN_10)
  }
}

// Each constant is tabulated as its greedy expansion: the first limb is the double nearest the
// constant, each next limb is the double nearest what remains, and so on. Most significant limb
// first. Twenty limbs take us down to the subnormal range, past which no more precision can be
// had from an `f64` limb.

const TABLE_LIMBS: usize = 20;

const PI: [f64; TABLE_LIMBS] = [
  3.141592653589793,
  1.2246467991473532e-16,
  -2.9947698097183397e-33,
  1.1124542208633653e-49,
  5.672231979640316e-66,
  1.7449862161352486e-83,
  6.02937273224954e-100,
  1.91012354687999e-116,
  3.0439781653442933e-133,
  -4.714300030947029e-150,
  1.0015491694355389e-166,
  6.210404478415895e-183,
  -1.7168132391611603e-199,
  -5.495774958969099e-216,
  -1.7490089948024087e-232,
  -3.5915099785785793e-249,
  1.768540572980925e-265,
  9.569391635737116e-282,
  5.839748741415892e-298,
  -4.5077468e-316,
];

const E: [f64; TABLE_LIMBS] = [
  2.718281828459045,
  1.4456468917292502e-16,
  -2.1277171080381768e-33,
  1.5156301598412191e-49,
  -9.335381378820847e-66,
  -2.021852603357621e-82,
  8.683510531926606e-99,
  -7.143883456983458e-115,
  -4.2998107368448233e-131,
  -5.091208330963075e-149,
  -2.6451469583258087e-166,
  -1.038562802070212e-182,
  -6.600489053715511e-199,
  -3.5499991859875913e-215,
  -2.9538161202476976e-232,
  1.5938733441162375e-248,
  9.443610167112715e-265,
  -5.3517225248129615e-281,
  2.5800799215277924e-298,
  1.232839341e-314,
];

const LN_2: [f64; TABLE_LIMBS] = [
  0.6931471805599453,
  2.3190468138462996e-17,
  5.707708438416212e-34,
  -3.5824322106018114e-50,
  -1.352169675798863e-66,
  6.080638740240814e-83,
  2.8955024332347147e-99,
  2.351386712145641e-116,
  4.459774417014281e-133,
  -3.069933263232527e-149,
  -2.0151474461966832e-165,
  1.618534348863741e-182,
  -1.3094978047454462e-198,
  6.665188278589824e-215,
  -2.93171211597727e-231,
  7.859799559040711e-248,
  5.978862565926012e-264,
  -3.5958643436716937e-280,
  -1.4081782025014926e-297,
  6.6998781616e-314,
];

const LN_10: [f64; TABLE_LIMBS] = [
  2.302585092994046,
  -2.1707562233822494e-16,
  -9.984262454465777e-33,
  -4.023357454450206e-49,
  1.928899528969337e-65,
  -5.212570118151255e-82,
  -2.6037369898693294e-98,
  8.297417620821901e-115,
  -4.1060098162989226e-131,
  -5.261488051675406e-148,
  -3.1868290930695915e-164,
  -1.1910622301553096e-180,
  9.106734402820891e-197,
  3.226984866273686e-213,
  -1.757386416107899e-229,
  2.8790985845649945e-246,
  5.984794382489271e-263,
  -2.897106789574831e-280,
  -1.0839661654967099e-296,
  -1.48815955024e-313,
];
