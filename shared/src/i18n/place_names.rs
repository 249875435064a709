//! Place-name layer: administrative regions, weather cities and mandis

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Dictionary;

const EN: &[(&str, &str)] = &[
    ("andhra-pradesh", "Andhra Pradesh"),
    ("assam", "Assam"),
    ("bihar", "Bihar"),
    ("gujarat", "Gujarat"),
    ("haryana", "Haryana"),
    ("karnataka", "Karnataka"),
    ("kerala", "Kerala"),
    ("madhya-pradesh", "Madhya Pradesh"),
    ("maharashtra", "Maharashtra"),
    ("odisha", "Odisha"),
    ("punjab", "Punjab"),
    ("rajasthan", "Rajasthan"),
    ("tamil-nadu", "Tamil Nadu"),
    ("telangana", "Telangana"),
    ("uttar-pradesh", "Uttar Pradesh"),
    ("west-bengal", "West Bengal"),
    ("Delhi", "Delhi"),
    ("Mumbai", "Mumbai"),
    ("Bangalore", "Bangalore"),
    ("Kolkata", "Kolkata"),
    ("Chennai", "Chennai"),
    ("guntur-mandi", "Guntur Mandi, Andhra Pradesh"),
    ("vijayawada-mandi", "Vijayawada Mandi, Andhra Pradesh"),
    ("nashik-mandi", "Nashik Mandi, Maharashtra"),
    ("aurangabad-mandi", "Aurangabad Mandi, Maharashtra"),
    ("ludhiana-mandi", "Ludhiana Mandi, Punjab"),
    ("amritsar-mandi", "Amritsar Mandi, Punjab"),
    ("lucknow-mandi", "Lucknow Mandi, Uttar Pradesh"),
    ("agra-mandi", "Agra Mandi, Uttar Pradesh"),
    ("hubli-mandi", "Hubli Mandi, Karnataka"),
    ("rajkot-mandi", "Rajkot Mandi, Gujarat"),
    ("ahmedabad-mandi", "Ahmedabad Mandi, Gujarat"),
];

const HI: &[(&str, &str)] = &[
    ("andhra-pradesh", "आंध्र प्रदेश"),
    ("assam", "असम"),
    ("bihar", "बिहार"),
    ("gujarat", "गुजरात"),
    ("haryana", "हरियाणा"),
    ("karnataka", "कर्नाटक"),
    ("kerala", "केरल"),
    ("madhya-pradesh", "मध्य प्रदेश"),
    ("maharashtra", "महाराष्ट्र"),
    ("odisha", "ओडिशा"),
    ("punjab", "पंजाब"),
    ("rajasthan", "राजस्थान"),
    ("tamil-nadu", "तमिलनाडु"),
    ("telangana", "तेलंगाना"),
    ("uttar-pradesh", "उत्तर प्रदेश"),
    ("west-bengal", "पश्चिम बंगाल"),
    ("Delhi", "दिल्ली"),
    ("Mumbai", "मुंबई"),
    ("Bangalore", "बैंगलोर"),
    ("Kolkata", "कोलकाता"),
    ("Chennai", "चेन्नई"),
    ("guntur-mandi", "गुंटूर मंडी, आंध्र प्रदेश"),
    ("vijayawada-mandi", "विजयवाड़ा मंडी, आंध्र प्रदेश"),
    ("nashik-mandi", "नासिक मंडी, महाराष्ट्र"),
    ("aurangabad-mandi", "औरंगाबाद मंडी, महाराष्ट्र"),
    ("ludhiana-mandi", "लुधियाना मंडी, पंजाब"),
    ("amritsar-mandi", "अमृतसर मंडी, पंजाब"),
    ("lucknow-mandi", "लखनऊ मंडी, उत्तर प्रदेश"),
    ("agra-mandi", "आगरा मंडी, उत्तर प्रदेश"),
    ("hubli-mandi", "हुबली मंडी, कर्नाटक"),
    ("rajkot-mandi", "राजकोट मंडी, गुजरात"),
    ("ahmedabad-mandi", "अहमदाबाद मंडी, गुजरात"),
];

pub(super) static ENGLISH: LazyLock<Dictionary> =
    LazyLock::new(|| EN.iter().copied().collect::<HashMap<_, _>>());

pub(super) static HINDI: LazyLock<Dictionary> =
    LazyLock::new(|| HI.iter().copied().collect::<HashMap<_, _>>());
