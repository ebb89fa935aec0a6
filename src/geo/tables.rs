//! Static country tables.
//!
//! Each entry maps a domain suffix (ASCII ccTLD or internationalized ccTLD) to
//! its English country name and the coarse region used for output partitioning.

/// `(suffix, country name, region)`
pub static COUNTRIES: &[(&str, &str, &str)] = &[
    ("ad", "Andorra", "europe_west"),
    ("ae", "United_Arab_Emirates", "middle_east"),
    ("af", "Afghanistan", "asia_central"),
    ("ag", "Antigua_and_Barbuda", "america_central"),
    ("al", "Albania", "europe_west"),
    ("am", "Armenia", "asia_central"),
    ("ao", "Angola", "africa_sub"),
    ("aq", "Antarctica", "antarctica"),
    ("ar", "Argentina", "america_south"),
    ("as", "American_Samoa", "asia_southeast"),
    ("at", "Austria", "europe_west"),
    ("au", "Australia", "oceania"),
    ("aw", "Aruba", "america_central"),
    ("ax", "Åland", "europe_west"),
    ("az", "Azerbaijan", "asia_central"),
    ("ba", "Bosnia_and_Herzegovina", "europe_east"),
    ("bb", "Barbados", "america_central"),
    ("bd", "Bangladesh", "asia_south"),
    ("be", "Belgium", "europe_west"),
    ("bf", "Burkina_Faso", "africa_sub"),
    ("bg", "Bulgaria", "europe_east"),
    ("bh", "Bahrain", "middle_east"),
    ("bi", "Burundi", "africa_sub"),
    ("bj", "Benin", "africa_sub"),
    ("bl", "Saint_Barthélemy", "america_central"),
    ("bm", "Bermuda", "america_central"),
    ("bn", "Brunei", "asia_southeast"),
    ("bo", "Bolivia", "america_south"),
    ("bq", "Caribbean_Netherlands", "america_central"),
    ("br", "Brazil", "america_brazil"),
    ("bs", "Bahamas", "america_central"),
    ("bt", "Bhutan", "asia_south"),
    ("bw", "Botswana", "africa_southern"),
    ("by", "Belarus", "europe_east"),
    ("bz", "Belize", "america_central"),
    ("ca", "Canada", "america_north"),
    ("cc", "Cocos", "asia_southeast"),
    ("cd", "Democratic_Republic_Congo", "africa_sub"),
    ("cf", "Central_African_Republic", "africa_sub"),
    ("cg", "Republic_of_Congo", "africa_sub"),
    ("ch", "Switzerland", "europe_west"),
    ("ci", "Côte_d'Ivoire", "africa_sub"),
    ("ck", "Cook_Islands", "asia_southeast"),
    ("cl", "Chile", "america_south"),
    ("cm", "Cameroon", "africa_sub"),
    ("cn", "China", "asia_east"),
    ("co", "Colombia", "america_south"),
    ("cr", "Costa_Rica", "america_central"),
    ("cu", "Cuba", "america_central"),
    ("cv", "Cabo_Verde", "africa_sub"),
    ("cw", "Curaçao", "america_central"),
    ("cx", "Christmas_Island", "asia_southeast"),
    ("cy", "Cyprus", "europe_west"),
    ("cz", "Czechia", "europe_east"),
    ("de", "Germany", "europe_west"),
    ("dj", "Djibouti", "africa_north"),
    ("dk", "Denmark", "europe_west"),
    ("dm", "Dominica", "america_central"),
    ("do", "Dominican_Republic", "america_central"),
    ("dz", "Algeria", "africa_north"),
    ("ec", "Ecuador", "america_south"),
    ("ee", "Estonia", "europe_east"),
    ("eg", "Egypt", "middle_east"),
    ("er", "Eritrea", "africa_north"),
    ("es", "Spain", "europe_west"),
    ("et", "Ethiopia", "africa_north"),
    ("fi", "Finland", "europe_west"),
    ("fj", "Fiji", "asia_southeast"),
    ("fk", "Falkland_Islands", "america_south"),
    ("fm", "Federated_States_Micronesia", "asia_southeast"),
    ("fo", "Faroe_Islands", "europe_west"),
    ("fr", "France", "europe_west"),
    ("ga", "Gabon", "africa_sub"),
    ("gb", "United_Kingdom", "europe_west"),
    ("gd", "Grenada", "america_central"),
    ("ge", "Georgia", "asia_central"),
    ("gf", "French_Guiana", "america_south"),
    ("gg", "Guernsey", "europe_west"),
    ("gh", "Ghana", "africa_sub"),
    ("gi", "Gibraltar", "africa_north"),
    ("gl", "Greenland", "europe_west"),
    ("gm", "Gambia", "africa_sub"),
    ("gn", "Guinea", "africa_sub"),
    ("gp", "Guadeloupe", "america_central"),
    ("gq", "Equatorial_Guinea", "africa_sub"),
    ("gr", "Greece", "europe_west"),
    ("gs", "South_Georgia", "america_south"),
    ("gt", "Guatemala", "america_central"),
    ("gu", "Guam", "oceania"),
    ("gw", "Guinea-Bissau", "africa_sub"),
    ("gy", "Guyana", "america_south"),
    ("hk", "Hong_Kong", "asia_east"),
    ("hm", "Heard_Island", "oceania"),
    ("hn", "Honduras", "america_central"),
    ("hr", "Croatia", "europe_east"),
    ("ht", "Haiti", "america_central"),
    ("hu", "Hungary", "europe_east"),
    ("id", "Indonesia", "asia_southeast"),
    ("ie", "Ireland", "europe_west"),
    ("il", "Israel", "middle_east"),
    ("im", "Isle_of_Man", "europe_west"),
    ("in", "India", "asia_south"),
    ("iq", "Iraq", "middle_east"),
    ("ir", "Iran", "asia_central"),
    ("is", "Iceland", "europe_west"),
    ("it", "Italy", "europe_west"),
    ("je", "Jersey", "europe_west"),
    ("jm", "Jamaica", "america_central"),
    ("jo", "Jordan", "middle_east"),
    ("jp", "Japan", "asia_east"),
    ("ke", "Kenya", "africa_sub"),
    ("kg", "Kyrgyzstan", "asia_central"),
    ("kh", "Cambodia", "asia_southeast"),
    ("ki", "Kiribati", "asia_southeast"),
    ("km", "Comoros", "africa_sub"),
    ("kn", "Saint_Kitts_Nevis", "america_central"),
    ("kp", "North_Korea", "asia_east"),
    ("kr", "South_Korea", "asia_east"),
    ("kw", "Kuwait", "middle_east"),
    ("ky", "Cayman_Islands", "america_central"),
    ("kz", "Kazakhstan", "asia_central"),
    ("la", "Lao", "asia_southeast"),
    ("lb", "Lebanon", "middle_east"),
    ("lc", "Saint_Lucia", "america_central"),
    ("li", "Liechtenstein", "europe_west"),
    ("lk", "Sri_Lanka", "asia_south"),
    ("lr", "Liberia", "africa_sub"),
    ("ls", "Lesotho", "africa_southern"),
    ("lt", "Lithuania", "europe_east"),
    ("lu", "Luxembourg", "europe_west"),
    ("lv", "Latvia", "europe_east"),
    ("ly", "Libya", "africa_north"),
    ("ma", "Morocco", "africa_north"),
    ("mc", "Monaco", "europe_west"),
    ("md", "Moldova", "europe_east"),
    ("me", "Montenegro", "europe_east"),
    ("mf", "Saint-Martin", "america_central"),
    ("mg", "Madagascar", "africa_sub"),
    ("mh", "Marshall_Islands", "oceania"),
    ("mk", "North_Macedonia", "europe_east"),
    ("ml", "Mali", "africa_sub"),
    ("mm", "Myanmar", "asia_southeast"),
    ("mn", "Mongolia", "asia_east"),
    ("mo", "Macao", "asia_east"),
    ("mp", "Northern_Mariana_Islands", "oceania"),
    ("mq", "Martinique", "america_central"),
    ("mr", "Mauritania", "africa_sub"),
    ("ms", "Montserrat", "america_central"),
    ("mt", "Malta", "europe_west"),
    ("mu", "Mauritius", "asia_southeast"),
    ("mv", "Maldives", "europe_west"),
    ("mw", "Malawi", "africa_sub"),
    ("mx", "Mexico", "america_central"),
    ("my", "Malaysia", "asia_southeast"),
    ("mz", "Mozambique", "africa_sub"),
    ("na", "Namibia", "africa_southern"),
    ("nc", "New_Caledonia", "oceania"),
    ("ne", "Niger", "africa_sub"),
    ("nf", "Norfolk_Island", "oceania"),
    ("ng", "Nigeria", "africa_sub"),
    ("ni", "Nicaragua", "america_central"),
    ("nl", "Netherlands", "europe_west"),
    ("no", "Norway", "europe_west"),
    ("np", "Nepal", "asia_south"),
    ("nr", "Nauru", "asia_southeast"),
    ("nu", "Niue", "oceania"),
    ("nz", "New_Zealand", "oceania"),
    ("om", "Oman", "middle_east"),
    ("pa", "Panama", "america_central"),
    ("pe", "Peru", "america_south"),
    ("pf", "French_Polynesia", "asia_southeast"),
    ("pg", "Papua_New_Guinea", "asia_southeast"),
    ("ph", "Philippines", "asia_southeast"),
    ("pk", "Pakistan", "asia_south"),
    ("pl", "Poland", "europe_east"),
    ("pm", "Saint_Pierre", "america_north"),
    ("pn", "Pitcairn", "oceania"),
    ("pr", "Puerto_Rico", "america_central"),
    ("ps", "Palestine", "middle_east"),
    ("pt", "Portugal", "europe_west"),
    ("pw", "Palau", "asia_southeast"),
    ("py", "Paraguay", "america_south"),
    ("qa", "Qatar", "middle_east"),
    ("re", "Réunion", "africa_sub"),
    ("ro", "Romania", "europe_east"),
    ("rs", "Serbia", "europe_east"),
    ("ru", "Russia", "europe_russia"),
    ("rw", "Rwanda", "africa_sub"),
    ("sa", "Saudi_Arabia", "middle_east"),
    ("sb", "Solomon_Islands", "asia_southeast"),
    ("sc", "Seychelles", "asia_south"),
    ("sd", "Sudan", "africa_north"),
    ("se", "Sweden", "europe_west"),
    ("sg", "Singapore", "asia_southeast"),
    ("sh", "Saint_Helena", "africa_sub"),
    ("si", "Slovenia", "europe_east"),
    ("sk", "Slovakia", "europe_east"),
    ("sl", "Sierra_Leone", "africa_sub"),
    ("sm", "San_Marino", "asia_southeast"),
    ("sn", "Senegal", "africa_sub"),
    ("so", "Somalia", "africa_north"),
    ("sr", "Suriname", "america_south"),
    ("ss", "South_Sudan", "africa_sub"),
    ("st", "Sao_Tome", "africa_sub"),
    ("sv", "El_Salvador", "america_central"),
    ("sx", "Sint_Maarten", "america_central"),
    ("sy", "Syria", "middle_east"),
    ("sz", "Eswatini", "africa_southern"),
    ("tc", "Caicos_Islands", "america_central"),
    ("td", "Chad", "africa_sub"),
    ("tf", "French_Southern", "antarctica"),
    ("tg", "Togo", "africa_sub"),
    ("th", "Thailand", "asia_southeast"),
    ("tj", "Tajikistan", "asia_central"),
    ("tk", "Tokelau", "oceania"),
    ("tl", "Timor-Leste", "asia_southeast"),
    ("tm", "Turkmenistan", "asia_central"),
    ("tn", "Tunisia", "africa_north"),
    ("to", "Tonga", "oceania"),
    ("tp", "East_Timor", "asia_southeast"),
    ("tr", "Turkey", "middle_east"),
    ("tt", "Trinidad_Tobago", "america_central"),
    ("tv", "Tuvalu", "oceania"),
    ("tw", "Taiwan", "asia_east"),
    ("tz", "Tanzania", "africa_sub"),
    ("ua", "Ukraine", "europe_east"),
    ("ug", "Uganda", "africa_sub"),
    ("uk", "United_Kingdom", "europe_west"),
    ("us", "United_States", "america_north"),
    ("uy", "Uruguay", "america_south"),
    ("uz", "Uzbekistan", "asia_central"),
    ("va", "The_Vatican", "europe_west"),
    ("vc", "Saint_Vincent", "america_central"),
    ("ve", "Venezuela", "america_south"),
    ("vg", "Virgin_Islands", "america_central"),
    ("vi", "Virgin_Islands", "america_central"),
    ("vn", "Viet_Nam", "asia_southeast"),
    ("vu", "Vanuatu", "asia_southeast"),
    ("wf", "Wallis_Futuna", "asia_southeast"),
    ("ws", "Samoa", "oceania"),
    ("ye", "Yemen", "middle_east"),
    ("yt", "Mayotte", "africa_sub"),
    ("za", "South_Africa", "africa_southern"),
    ("zm", "Zambia", "africa_sub"),
    ("zw", "Zimbabwe", "africa_southern"),
    ("ελ", "Greece", "europe_west"),
    ("бг", "Bulgaria", "europe_east"),
    ("бел", "Bulgaria", "europe_east"),
    ("мкд", "North_Macedonia", "europe_east"),
    ("рф", "Russia", "europe_russia"),
    ("срб", "Serbia", "europe_east"),
    ("укр", "Ukraine", "europe_east"),
    ("қаз", "Kazakhstan", "asia_central"),
    ("հայ", "Armenia", "asia_central"),
    ("الاردن", "Jordan", "middle_east"),
    ("الجزائر", "Algeria", "africa_north"),
    ("السعودية", "Saudi_Arabia", "middle_east"),
    ("المغرب", "Morocco", "middle_east"),
    ("امارات", "United_Arab_Emirates", "middle_east"),
    ("ایران", "Iran", "middle_east"),
    ("بھارت", "India", "asia_south"),
    ("تونس", "Tunisia", "africa_north"),
    ("سودان", "Sudan", "africa_sub"),
    ("سورية", "Syria", "middle_east"),
    ("عراق", "Iraq", "middle_east"),
    ("عمان", "Oman", "middle_east"),
    ("فلسطين", "Palestine", "middle_east"),
    ("قطر", "Qatar", "middle_east"),
    ("مصر", "Egypt", "middle_east"),
    ("مليسيا", "Malaysia", "asia_southeast"),
    ("موريتانيا", "Mauritania", "africa_north"),
    ("پاكستان", "Pakistan", "asia_south"),
    ("پاکستان", "Pakistan", "asia_south"),
    ("ڀارت", "India", "asia_south"),
    ("भारत", "India", "asia_south"),
    ("বাংলা", "Bangladesh", "asia_south"),
    ("ভারত", "India", "asia_south"),
    ("ਭਾਰਤ", "India", "asia_south"),
    ("ભારત", "India", "asia_south"),
    ("இந்தியா", "India", "asia_south"),
    ("இலங்கை", "Sri_Lanka", "asia_south"),
    ("சிங்கப்பூர்", "Singapore", "asia_southeast"),
    ("భారత్", "India", "asia_south"),
    ("ಭಾರತ", "India", "asia_south"),
    ("ഭാരതം", "India", "asia_south"),
    ("ලංකා", "Sri_Lanka", "asia_south"),
    ("ไทย", "Thailand", "asia_southeast"),
    ("中国", "China", "asia_east"),
    ("中國", "China", "asia_east"),
    ("台湾", "Taiwan", "asia_east"),
    ("台灣", "Taiwan", "asia_east"),
    ("新加坡", "Singapore", "asia_southeast"),
    ("澳門", "Macao", "asia_east"),
    ("香港", "Hong_Kong", "asia_east"),
    ("한국", "South_Korea", "asia_east"),
];

/// Internationalized suffixes as they appear in a parsed URL host (ASCII-compatible
/// encoding), mapped back to their Unicode form in [COUNTRIES].
pub static IDN_SUFFIXES: &[(&str, &str)] = &[
    ("xn--qxam", "ελ"),
    ("xn--90ae", "бг"),
    ("xn--90ais", "бел"),
    ("xn--d1alf", "мкд"),
    ("xn--p1ai", "рф"),
    ("xn--90a3ac", "срб"),
    ("xn--j1amh", "укр"),
    ("xn--80ao21a", "қаз"),
    ("xn--y9a3aq", "հայ"),
    ("xn--mgbayh7gpa", "الاردن"),
    ("xn--lgbbat1ad8j", "الجزائر"),
    ("xn--mgberp4a5d4ar", "السعودية"),
    ("xn--mgbc0a9azcg", "المغرب"),
    ("xn--mgbaam7a8h", "امارات"),
    ("xn--mgba3a4f16a", "ایران"),
    ("xn--mgbbh1a71e", "بھارت"),
    ("xn--pgbs0dh", "تونس"),
    ("xn--mgbpl2fh", "سودان"),
    ("xn--ogbpf8fl", "سورية"),
    ("xn--mgbtx2b", "عراق"),
    ("xn--mgb9awbf", "عمان"),
    ("xn--ygbi2ammx", "فلسطين"),
    ("xn--wgbl6a", "قطر"),
    ("xn--wgbh1c", "مصر"),
    ("xn--mgbx4cd0ab", "مليسيا"),
    ("xn--mgbah1a3hjkrd", "موريتانيا"),
    ("xn--mgbai9a5eva00b", "پاكستان"),
    ("xn--mgbai9azgqp6j", "پاکستان"),
    ("xn--mgbgu82a", "ڀارت"),
    ("xn--h2brj9c", "भारत"),
    ("xn--54b7fta0cc", "বাংলা"),
    ("xn--45brj9c", "ভারত"),
    ("xn--s9brj9c", "ਭਾਰਤ"),
    ("xn--gecrj9c", "ભારત"),
    ("xn--xkc2dl3a5ee0h", "இந்தியா"),
    ("xn--xkc2al3hye2a", "இலங்கை"),
    ("xn--clchc0ea0b2g2a9gcd", "சிங்கப்பூர்"),
    ("xn--fpcrj9c3d", "భారత్"),
    ("xn--2scrj9c", "ಭಾರತ"),
    ("xn--rvc1e0am3e", "ഭാരതം"),
    ("xn--fzc2c9e2c", "ලංකා"),
    ("xn--o3cw4h", "ไทย"),
    ("xn--fiqs8s", "中国"),
    ("xn--fiqz9s", "中國"),
    ("xn--kprw13d", "台湾"),
    ("xn--kpry57d", "台灣"),
    ("xn--yfro4i67o", "新加坡"),
    ("xn--mix891f", "澳門"),
    ("xn--j6w193g", "香港"),
    ("xn--3e0b707e", "한국"),
];
