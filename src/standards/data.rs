// Built-in ISO/DIN equivalence table for fasteners.
use super::StandardMapping;

/// Declaration order is significant: when a title holds more than one valid
/// pair, the earliest entry here wins.
pub static STANDARD_MAPPINGS: [StandardMapping; 67] = [
    StandardMapping::new("ISO 4014", "ISO4014", "/DIN 931"),
    StandardMapping::new("ISO 4017", "ISO4017", "/DIN 933"),
    StandardMapping::new("ISO 4032", "ISO4032", "/DIN 934"),
    StandardMapping::new("ISO 4762", "ISO4762", "/DIN 912"),
    StandardMapping::new("ISO 10642", "ISO10642", "/DIN 7991"),
    StandardMapping::new("ISO 7089", "ISO7089", "/DIN 125"),
    StandardMapping::new("ISO 7091", "ISO7091", "/DIN 126"),
    StandardMapping::new("ISO 7092", "ISO7092", "/DIN 433"),
    StandardMapping::new("ISO 7093", "ISO7093", "/DIN 9021"),
    StandardMapping::new("ISO 7094", "ISO7094", "/DIN 440"),
    StandardMapping::new("ISO 1207", "ISO1207", "/DIN 84"),
    StandardMapping::new("ISO 1580", "ISO1580", "/DIN 85"),
    StandardMapping::new("ISO 2009", "ISO2009", "/DIN 963"),
    StandardMapping::new("ISO 2010", "ISO2010", "/DIN 964"),
    StandardMapping::new("ISO 7045", "ISO7045", "/DIN 7985"),
    StandardMapping::new("ISO 7046", "ISO7046", "/DIN 965"),
    StandardMapping::new("ISO 7047", "ISO7047", "/DIN 966"),
    StandardMapping::new("ISO 4026", "ISO4026", "/DIN 913"),
    StandardMapping::new("ISO 4027", "ISO4027", "/DIN 914"),
    StandardMapping::new("ISO 4028", "ISO4028", "/DIN 915"),
    StandardMapping::new("ISO 4029", "ISO4029", "/DIN 916"),
    StandardMapping::new("ISO 4034", "ISO4034", "/DIN 555"),
    StandardMapping::new("ISO 4016", "ISO4016", "/DIN 601"),
    StandardMapping::new("ISO 4018", "ISO4018", "/DIN 558"),
    StandardMapping::new("ISO 8765", "ISO8765", "/DIN 960"),
    StandardMapping::new("ISO 8676", "ISO8676", "/DIN 961"),
    StandardMapping::new("ISO 4035", "ISO4035", "/DIN 439"),
    StandardMapping::new("ISO 7040", "ISO7040", "/DIN 982"),
    StandardMapping::new("ISO 10511", "ISO10511", "/DIN 985"),
    StandardMapping::new("ISO 7042", "ISO7042", "/DIN 980"),
    StandardMapping::new("ISO 4161", "ISO4161", "/DIN 6923"),
    StandardMapping::new("ISO 1234", "ISO1234", "/DIN 94"),
    StandardMapping::new("ISO 2338", "ISO2338", "/DIN 7"),
    StandardMapping::new("ISO 8734", "ISO8734", "/DIN 6325"),
    StandardMapping::new("ISO 8752", "ISO8752", "/DIN 1481"),
    StandardMapping::new("ISO 13337", "ISO13337", "/DIN 7346"),
    StandardMapping::new("ISO 2339", "ISO2339", "/DIN 1"),
    StandardMapping::new("ISO 8735", "ISO8735", "/DIN 7979"),
    StandardMapping::new("ISO 8736", "ISO8736", "/DIN 7978"),
    StandardMapping::new("ISO 2341", "ISO2341", "/DIN 1444"),
    StandardMapping::new("ISO 7049", "ISO7049", "/DIN 7981"),
    StandardMapping::new("ISO 7050", "ISO7050", "/DIN 7982"),
    StandardMapping::new("ISO 7051", "ISO7051", "/DIN 7983"),
    StandardMapping::new("ISO 1479", "ISO1479", "/DIN 7976"),
    StandardMapping::new("ISO 1481", "ISO1481", "/DIN 7971"),
    StandardMapping::new("ISO 1482", "ISO1482", "/DIN 7972"),
    StandardMapping::new("ISO 1483", "ISO1483", "/DIN 7973"),
    StandardMapping::new("ISO 7434", "ISO7434", "/DIN 553"),
    StandardMapping::new("ISO 7435", "ISO7435", "/DIN 417"),
    StandardMapping::new("ISO 7436", "ISO7436", "/DIN 438"),
    StandardMapping::new("ISO 2342", "ISO2342", "/DIN 427"),
    StandardMapping::new("ISO 4766", "ISO4766", "/DIN 551"),
    StandardMapping::new("ISO 8738", "ISO8738", "/DIN 1440"),
    StandardMapping::new("ISO 1051", "ISO1051", "/DIN 660"),
    StandardMapping::new("ISO 7412", "ISO7412", "/DIN 6914"),
    StandardMapping::new("ISO 7414", "ISO7414", "/DIN 6915"),
    StandardMapping::new("ISO 7416", "ISO7416", "/DIN 6916"),
    StandardMapping::new("ISO 8677", "ISO8677", "/DIN 603"),
    StandardMapping::new("ISO 2936", "ISO2936", "/DIN 911"),
    StandardMapping::new("ISO 8740", "ISO8740", "/DIN 1473"),
    StandardMapping::new("ISO 8741", "ISO8741", "/DIN 1474"),
    StandardMapping::new("ISO 8742", "ISO8742", "/DIN 1475"),
    StandardMapping::new("ISO 8744", "ISO8744", "/DIN 1471"),
    StandardMapping::new("ISO 8745", "ISO8745", "/DIN 1472"),
    StandardMapping::new("ISO 8746", "ISO8746", "/DIN 1476"),
    StandardMapping::new("ISO 8747", "ISO8747", "/DIN 1477"),
    StandardMapping::new("ISO 8750", "ISO8750", "/DIN 7343"),
];
