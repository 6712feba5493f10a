//! The built-in aortic-disease phrase lexicon.
//!
//! Order is the evaluation order of [`PatternSet::builtin`](crate::PatternSet::builtin).
//! Every entry is a lowercase literal phrase; apostrophes become optional at
//! compile time, so "takayasu's arteritis" also covers "takayasus arteritis".

/// Built-in phrases, tested in this order.
pub const BUILTIN_PHRASES: &[&str] = &[
    // Diseases and conditions
    "acute aortic syndrome",
    "aortic dissection",
    "dissection, abdominal aorta",
    "abdominal aortic dissection",
    "dissection, thoracoabdominal aorta",
    "thoracoabdominal aortic dissection",
    "dissection, thoracic aorta",
    "aortic arch dissection",
    "descending aorta dissection",
    "descending thoracic aortic dissection",
    "dissection, aortic arch",
    "dissection, descending aorta",
    "dissection, descending thoracic aorta",
    "thoracic aorta dissection",
    "thoracic aortic dissection",
    "aortic intramural hematoma",
    "intramural hematoma aorta",
    "penetrating atherosclerotic ulcer",
    "aortic penetrating ulcer",
    "penetrating aortic ulcer",
    // "penetrating ulcer" alone is general; kept as a deliberate inclusion
    "penetrating ulcer",
    "penetrating ulcer aorta",
    "aortic aneurysm",
    "aortic aneurysm, abdominal",
    "abdominal aorta aneurysm",
    "abdominal aortic aneurysm",
    "aneurysm, abdominal aorta",
    "aneurysm, abdominal aortic",
    "aortic aneurysm, thoracoabdominal",
    "taa thoracoabdominal aortic aneurysm",
    "thoracoabdominal aortic aneurysm",
    "aortic aneurysm, thoracic",
    "aneurysm, aortic arch",
    "aortic arch aneurysm",
    "aortic root aneurysm",
    "aneurysm, aortic root",
    "aneurysm, ascending aorta",
    "aaa ascending aorta aneurysm",
    "ascending aorta aneurysm",
    "ascending aortic aneurysm",
    "descending thoracic aortic aneurysm",
    "aneurysm, descending thoracic aorta",
    "aneurysm, thoracic aorta",
    "aneurysm, thoracic aortic",
    "thoracic aorta aneurysm",
    "thoracic aortic aneurysm",
    "aortic rupture",
    "aortic aneurysm, ruptured",
    "ruptured aortic aneurysm",
    "loeys-dietz syndrome",
    "loeys-dietz aortic aneurysm syndrome",
    "loeys-dietz syndrome, type 1a",
    "marfan syndrome",
    "aortic arch syndromes",
    "takayasu arteritis",
    "aortitis syndrome",
    "arteritis, takayasu's",
    "pulseless disease",
    "takayasu disease",
    "takayasu syndrome",
    "takayasu's arteritis",
    "young female arteritis",
    "vascular ring",
    "double aortic arch",
    "right aortic arch syndrome",
    "right aortic arch with left ligamentum arteriosum",
    "aortitis",
    "leriche's syndrome",
    "aortic valve disease",
    // Procedures on the aorta and its major branches
    "aortic aneurysm repair",
    "aortocaval fistula repair",
    "aortoenteric fistula repair",
    "celiac artery bypass",
    "mesenteric artery bypass",
    "renal artery bypass",
    "renal artery endarterectomy",
    "stenting to repair aneurysms",
    // "vascular stenting" is broad; kept as a deliberate inclusion
    "vascular stenting",
    // Acronyms and named endovascular procedures
    "bevar",
    "branched endovascular aneurysm repair",
    "endovascular aortic repair",
    "endovascular stent grafting",
    "fevar",
    "fenestrated endovascular aneurysm repair",
    "tevar",
    "thoracic endovascular aneurysm repair",
    "thoracic endovascular aortic repair",
    "thoracic endovascular repair",
    "open aortic repair",
    "hybrid aortic repair",
    "debranching",
    "aortic reconstruction",
    "aortic surgery",
    "aortic repair",
    "aortic replacement",
    "aortic graft",
    "aortography",
    // Common complication of aortic surgery
    "spinal cord ischemia",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_lowercase_and_single_spaced() {
        for phrase in BUILTIN_PHRASES {
            assert_eq!(
                *phrase,
                phrase.to_lowercase(),
                "phrase '{phrase}' is not lowercase"
            );
            assert!(!phrase.contains("  "), "phrase '{phrase}' has a double space");
            assert_eq!(*phrase, phrase.trim(), "phrase '{phrase}' is untrimmed");
        }
    }

    #[test]
    fn lexicon_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for phrase in BUILTIN_PHRASES {
            assert!(seen.insert(*phrase), "duplicate phrase '{phrase}'");
        }
    }
}
