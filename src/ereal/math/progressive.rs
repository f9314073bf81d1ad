//! Every function must get more accurate as the number of limbs grows. These tests evaluate each
//! function at a fixed argument for several precisions, and count the correct decimal digits
//! against a reference value with more digits than any of them need. References are the exact
//! values at the double argument (so `cos` is of the double nearest 0.3, not of 3/10).

use super::*;
use crate::ereal::test::correct_digits;

/// Minimum number of correct digits at each precision.
const THRESHOLDS: [(usize, f64); 5] = [(4, 15.), (8, 30.), (12, 45.), (16, 60.), (19, 72.)];

macro_rules! progressive {
  ($name:ident, $arg:expr, $reference:expr, |$x:ident| $body:expr) => {
    #[test]
    fn $name() {
      fn digits<const N: usize>() -> f64 {
        let f = |$x: Ereal<N>| $body;
        let reference = $reference.parse::<Ereal<N>>().unwrap();
        correct_digits(f(Ereal::<N>::from($arg)), reference)
      }
      let achieved = [digits::<4>(), digits::<8>(), digits::<12>(), digits::<16>(), digits::<19>()];
      for ((limbs, threshold), digits) in THRESHOLDS.into_iter().zip(achieved) {
        assert!(digits >= threshold, "{} limbs: {digits} correct digits", limbs);
      }
    }
  };
}

progressive!{sin, 0.5,
  "0.47942553860420300027328793521557138808180336794060067518861661312553500028781483220963127468434826908613209108450572",
  |x| x.sin()}

progressive!{cos, 0.3,
  "0.95533648912560602292324360434208740922689759275087726603964827108391842840719441606160360093721980817419538187057565",
  |x| x.cos()}

progressive!{tan, 0.4,
  "0.42279321873816178815523440002094227056035703985243332312071522884607575680804251426178685496658686241985526514173558",
  |x| x.tan()}

progressive!{atan, 1.,
  "0.78539816339744830961566084581987572104929234984377645524373614807695410157155224965700870633552926699553702162832058",
  |x| x.atan()}

progressive!{asin, 0.5,
  "0.52359877559829887307710723054658381403286156656251763682915743205130273438103483310467247089035284466369134775221372",
  |x| x.asin()}

progressive!{acos, 0.5,
  "1.0471975511965977461542144610931676280657231331250352736583148641026054687620696662093449417807056893273826955044274",
  |x| x.acos()}

progressive!{exp, 1.,
  "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274274663919320031",
  |x| x.exp()}

progressive!{exp2, 3.5,
  "11.313708498984760390413509793677584628557375003015584585413437903925859827696856310803100274621132581880110769847298",
  |x| x.exp2()}

progressive!{exp10, 1.5,
  "31.622776601683793319988935444327185337195551393252168268575048527925944386392382213442481083793002951873472841528401",
  |x| x.exp10()}

progressive!{ln, 2.,
  "0.69314718055994530941723212145817656807550013436025525412068000949339362196969471560586332699641868754200148102057069",
  |x| x.ln()}

progressive!{log2, 10.,
  "3.3219280948873623478703194294893901758648313930245806120547563958159347766086252158501397433593701550996573717102503",
  |x| x.log2()}

progressive!{log10, 100., "2.0", |x| x.log10()}

progressive!{sinh, 0.5,
  "0.52109530549374736162242562641149155910592898261148052794609357645280225089023359231706445427418859348822142398113414",
  |x| x.sinh()}

progressive!{cosh, 0.5,
  "1.1276259652063807852262251614026720125478471180986674836289857351878587703039820163157120657821780495146452137751737",
  |x| x.cosh()}

progressive!{tanh, 0.5,
  "0.46211715726000975850231848364367254873028928033011303855273181583808090614040927877494906415196249058434893298628155",
  |x| x.tanh()}

progressive!{asinh, 1.,
  "0.88137358701954302523260932497979230902816032826163541075329560865337718422202608783370689191025604285673981619210649",
  |x| x.asinh()}

progressive!{acosh, 2.,
  "1.3169578969248167086250463473079684440269819714675164797684722569204601854164439760742190134501017835564654365656050",
  |x| x.acosh()}

progressive!{atanh, 0.5,
  "0.54930614433405484569762261846126285232374527891137472586734716681874714660930448343680787740686604439398501453297893",
  |x| x.atanh()}

progressive!{sqrt, 2.,
  "1.4142135623730950488016887242096980785696718753769480731766797379907324784621070388503875343276415727350138462309123",
  |x| x.sqrt()}

progressive!{pow, 2.,
  "11.313708498984760390413509793677584628557375003015584585413437903925859827696856310803100274621132581880110769847298",
  |x| x.pow(Ereal::from(3.5))}

#[test]
fn sin_at_nineteen_limbs() {
  let reference = "0.47942553860420300027328793521557138808180336794060067518861661312553500028781483220963127468434826908613209108450572";
  let x = Ereal::<19>::from(0.5).sin();
  assert!(correct_digits(x, reference.parse().unwrap()) >= 72.);
}

#[test]
fn pow_at_eight_limbs() {
  let reference = "11.313708498984760390413509793677584628557375003015584585413437903925859827696856310803100274621132581880110769847298";
  let x = Ereal::<8>::from(2.).pow(Ereal::from(3.5));
  assert!(correct_digits(x, reference.parse().unwrap()) >= 30.);
}
