//! Coefficient tables for the fitted rational approximations.
//!
//! Coefficients are stored lowest degree first and scaled by `SCALE`.
//! Every denominator is normalised so that its constant term is exactly one.

use crate::math::horner::{Coefficient, RationalFunction};

static CDF_NUM: [Coefficient; 13] = [
    Coefficient::pos(500_000_000_000_000_000),
    Coefficient::pos(193_533_563_670_556_396),
    Coefficient::neg(6_031_044_591_224_216),
    Coefficient::pos(12_301_756_902_597_364),
    Coefficient::pos(9_376_710_591_824_580),
    Coefficient::pos(311_684_753_049_657),
    Coefficient::neg(54_884_626_547_105),
    Coefficient::pos(141_766_477_355_216),
    Coefficient::pos(8_965_621_754_676),
    Coefficient::neg(3_497_735_597_027),
    Coefficient::pos(1_790_031_243_263),
    Coefficient::neg(197_595_467_677),
    Coefficient::pos(27_220_357_745),
];

static CDF_DEN: [Coefficient; 13] = [
    Coefficient::pos(1_000_000_000_000_000_000),
    Coefficient::neg(410_817_433_460_680_568),
    Coefficient::pos(315_722_798_234_268_185),
    Coefficient::neg(94_326_071_429_678_164),
    Coefficient::pos(39_383_915_552_962_343),
    Coefficient::neg(8_762_468_397_319_368),
    Coefficient::pos(2_532_614_849_878_994),
    Coefficient::neg(422_709_436_520_397),
    Coefficient::pos(95_453_299_489_566),
    Coefficient::neg(12_481_396_364_162),
    Coefficient::pos(2_394_453_419_483),
    Coefficient::neg(221_447_522_597),
    Coefficient::pos(27_640_924_500),
];

/// Upper-half cumulative distribution, evaluated at `|z|` for `|z| <= 6`.
pub static CDF: RationalFunction = RationalFunction::new(&CDF_NUM, &CDF_DEN);

static PDF_NUM: [Coefficient; 11] = [
    Coefficient::pos(398_942_280_399_704_123),
    Coefficient::neg(242_909_009_270_898_310),
    Coefficient::neg(10_358_232_062_047_645),
    Coefficient::pos(41_138_186_242_393_501),
    Coefficient::neg(9_424_217_789_627_403),
    Coefficient::neg(1_180_942_672_203_415),
    Coefficient::pos(945_727_447_517_503),
    Coefficient::neg(199_882_690_293_766),
    Coefficient::pos(21_738_033_908_878),
    Coefficient::neg(1_245_102_339_571),
    Coefficient::pos(29_918_733_761),
];

static PDF_DEN: [Coefficient; 11] = [
    Coefficient::pos(1_000_000_000_000_000_000),
    Coefficient::neg(608_882_591_469_460_255),
    Coefficient::pos(474_035_778_128_546_798),
    Coefficient::neg(201_323_286_731_987_523),
    Coefficient::pos(88_395_386_836_323_751),
    Coefficient::neg(27_512_257_097_839_940),
    Coefficient::pos(8_146_115_089_866_507),
    Coefficient::neg(1_770_059_072_616_095),
    Coefficient::pos(335_447_350_977_452),
    Coefficient::neg(40_175_958_586_504),
    Coefficient::pos(3_428_819_333_030),
];

/// Density on `[0, 6]`.
pub static PDF: RationalFunction = RationalFunction::new(&PDF_NUM, &PDF_DEN);

static PPF_CENTRAL_NUM: [Coefficient; 9] = [
    Coefficient::neg(3_062_034_548_833_819_603),
    Coefficient::neg(400_636_900_120_137_672_546),
    Coefficient::neg(5_010_130_046_660_527_233_527),
    Coefficient::pos(13_442_374_122_930_749_383_514),
    Coefficient::pos(25_164_237_220_113_049_538_838),
    Coefficient::neg(96_541_336_846_298_615_802_873),
    Coefficient::pos(93_983_051_172_439_757_563_372),
    Coefficient::neg(33_038_816_766_701_364_458_034),
    Coefficient::pos(2_406_117_952_091_227_119_654),
];

static PPF_CENTRAL_DEN: [Coefficient; 9] = [
    Coefficient::pos(1_000_000_000_000_000_000),
    Coefficient::pos(185_050_315_870_863_509_049),
    Coefficient::pos(3_940_079_217_746_234_097_923),
    Coefficient::pos(5_341_457_463_364_712_644_504),
    Coefficient::neg(36_133_609_260_679_013_019_668),
    Coefficient::pos(34_051_751_009_941_440_196_862),
    Coefficient::pos(2_122_010_648_848_103_592_639),
    Coefficient::neg(13_390_331_933_240_302_351_314),
    Coefficient::pos(3_883_174_041_217_230_547_958),
];

/// Central quantile estimate, evaluated at `p` for `p` in `[0.02, 0.98]`.
pub static PPF_CENTRAL: RationalFunction = RationalFunction::new(&PPF_CENTRAL_NUM, &PPF_CENTRAL_DEN);

static PPF_TAIL_NUM: [Coefficient; 6] = [
    Coefficient::neg(3_177_876_086_748_181_358),
    Coefficient::neg(8_116_545_119_549_163_808),
    Coefficient::pos(2_066_516_429_759_935_697),
    Coefficient::pos(4_657_538_132_780_708_072),
    Coefficient::pos(1_107_342_753_696_598_666),
    Coefficient::pos(61_592_163_084_884_885),
];

static PPF_TAIL_DEN: [Coefficient; 6] = [
    Coefficient::pos(1_000_000_000_000_000_000),
    Coefficient::pos(5_467_517_417_405_478_315),
    Coefficient::pos(4_947_313_747_966_977_319),
    Coefficient::pos(1_109_129_081_700_662_304),
    Coefficient::pos(61_567_253_132_544_406),
    Coefficient::pos(257_239_991_674),
];

/// Tail quantile magnitude, evaluated at `t = sqrt(-2 ln p)` for `p < 0.02`.
pub static PPF_TAIL: RationalFunction = RationalFunction::new(&PPF_TAIL_NUM, &PPF_TAIL_DEN);
