/// A Latin root family and the cognate hint it teaches
#[derive(Debug, Clone, Copy)]
pub struct MorphemeRule {
    /// Substrings matched against the normalized lemma (lowercase `a-z` only)
    pub roots: &'static [&'static str],
    pub hint: &'static str,
}

impl MorphemeRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.roots.iter().any(|root| normalized.contains(root))
    }
}

/// Ordered rule table. The first matching rule wins, so order resolves
/// lemmas that contain more than one root.
pub const MORPHEME_RULES: &[MorphemeRule] = &[
    // carry
    MorphemeRule { roots: &["port"], hint: "Think: portable." },
    // write
    MorphemeRule { roots: &["scrib", "script"], hint: "Think: scribble, script." },
    // lead
    MorphemeRule { roots: &["duc", "duct"], hint: "Think: conduct, produce." },
    // see
    MorphemeRule { roots: &["vid", "vis"], hint: "Think: video, vision." },
    // hear
    MorphemeRule { roots: &["aud"], hint: "Think: audio, audience." },
    // say
    MorphemeRule { roots: &["dic", "dict"], hint: "Think: dictionary, predict." },
    // send
    MorphemeRule { roots: &["mitt", "miss"], hint: "Think: mission, transmit." },
    // take, seize
    MorphemeRule { roots: &["capi", "capt", "cept"], hint: "Think: capture, accept." },
    // come
    MorphemeRule { roots: &["veni", "vent"], hint: "Think: convene, event." },
    // put, place
    MorphemeRule { roots: &["pon", "posit"], hint: "Think: position, postpone." },
    // touch
    MorphemeRule { roots: &["tang", "tact"], hint: "Think: tangible, contact." },
    // run
    MorphemeRule { roots: &["curr", "curs"], hint: "Think: current, cursor." },
    // make, do
    MorphemeRule { roots: &["fac", "fact", "fic"], hint: "Think: factory, effect." },
    // death
    MorphemeRule { roots: &["mort"], hint: "Think: mortal." },
    // earth
    MorphemeRule { roots: &["terr"], hint: "Think: terrain, territory." },
    // water
    MorphemeRule { roots: &["aqu"], hint: "Think: aquarium." },
    // voice, call
    MorphemeRule { roots: &["voc", "vok"], hint: "Think: vocal, invoke." },
    // look
    MorphemeRule { roots: &["spec", "spic"], hint: "Think: inspect, spectacle." },
    // believe
    MorphemeRule { roots: &["cred"], hint: "Think: credible." },
    // war
    MorphemeRule { roots: &["bell"], hint: "Think: belligerent." },
    // city
    MorphemeRule { roots: &["urb"], hint: "Think: urban." },
    // ship
    MorphemeRule { roots: &["nav"], hint: "Think: navy, navigate." },
    // king, rule
    MorphemeRule { roots: &["rex", "reg"], hint: "Think: regal, regent." },
    // book
    MorphemeRule { roots: &["libr"], hint: "Think: library." },
    // time
    MorphemeRule { roots: &["tempor"], hint: "Think: temporary." },
    // drive, push
    MorphemeRule { roots: &["pell", "puls"], hint: "Think: propel, pulse." },
    // break
    MorphemeRule { roots: &["frang", "fract"], hint: "Think: fracture, fragile." },
    // speak
    MorphemeRule { roots: &["loqu", "locut"], hint: "Think: eloquent." },
    // sit
    MorphemeRule { roots: &["sed", "sess"], hint: "Think: sediment, session." },
    // mind
    MorphemeRule { roots: &["ment"], hint: "Think: mental." },
    // people
    MorphemeRule { roots: &["popul"], hint: "Think: population, popular." },
];

/// First rule matching an already-normalized lemma
pub fn find_rule(normalized: &str) -> Option<&'static MorphemeRule> {
    MORPHEME_RULES.iter().find(|rule| rule.matches(normalized))
}
