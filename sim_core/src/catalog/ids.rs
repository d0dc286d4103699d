//! Well-known api names

// === Components ===
pub const BF_SWORD: &str = "TFT_Item_BFSword";
pub const CHAIN_VEST: &str = "TFT_Item_ChainVest";
pub const GIANTS_BELT: &str = "TFT_Item_GiantsBelt";
pub const NEEDLESSLY_LARGE_ROD: &str = "TFT_Item_NeedlesslyLargeRod";
pub const NEGATRON_CLOAK: &str = "TFT_Item_NegatronCloak";
pub const RECURVE_BOW: &str = "TFT_Item_RecurveBow";
pub const SPARRING_GLOVES: &str = "TFT_Item_SparringGloves";
pub const TEAR_OF_THE_GODDESS: &str = "TFT_Item_TearOfTheGoddess";

// === Static completed items ===
pub const RABADONS_DEATHCAP: &str = "TFT_Item_RabadonsDeathcap";
pub const DEATHBLADE: &str = "TFT_Item_Deathblade";
pub const WARMOGS_ARMOR: &str = "TFT_Item_WarmogsArmor";
pub const INFINITY_EDGE: &str = "TFT_Item_InfinityEdge";
pub const JEWELED_GAUNTLET: &str = "TFT_Item_JeweledGauntlet";

// === Dynamic items ===
pub const ARCHANGELS_STAFF: &str = "TFT_Item_ArchangelsStaff";
pub const GUINSOOS_RAGEBLADE: &str = "TFT_Item_GuinsoosRageblade";
pub const TITANS_RESOLVE: &str = "TFT_Item_TitansResolve";
pub const QUICKSILVER: &str = "TFT_Item_Quicksilver";
pub const NASHORS_TOOTH: &str = "TFT_Item_Leviathan";
pub const BLUE_BUFF: &str = "TFT_Item_BlueBuff";
pub const EVENSHROUD: &str = "TFT_Item_Evenshroud";
pub const NAVORI_FLICKERBLADES: &str = "TFT_Item_Artifact_NavoriFlickerblades";
pub const KRAKENS_FURY: &str = "TFT_Item_RunaansHurricane";
pub const SPEAR_OF_SHOJIN: &str = "TFT_Item_SpearOfShojin";
pub const SPIRIT_VISAGE: &str = "TFT_Item_Redemption";
pub const VOID_STAFF: &str = "TFT_Item_StatikkShiv";
pub const RED_BUFF: &str = "TFT_Item_RapidFireCannon";

// === Traits ===
pub const RAPIDFIRE: &str = "Rapidfire";

/// Api name given to the training target
pub const TRAINING_DUMMY: &str = "TFT_TrainingDummy";
