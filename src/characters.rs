//! Static character profile table.
//!
//! Profiles are immutable and keyed by id. Each profile can produce the
//! studio links a profile page offers ("Generate with" and "Remix").
use serde::Serialize;

use crate::studio::prefill::{build_studio_url, StudioLink};
use crate::studio::Mode;

#[derive(Debug, Serialize)]
pub struct SignatureColour {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub style: &'static str,
    pub energy: &'static str,
    pub visual_vibe: &'static str,
    pub signature_look: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub vibe: &'static str,
    pub interaction_style: &'static str,
    pub fantasy_direction: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommended {
    pub aspect_ratios: &'static [&'static str],
    pub lighting_styles: &'static [&'static str],
    pub style_modifiers: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consistency {
    pub embedding_keyword: &'static str,
    pub face_structure_notes: &'static str,
    pub signature_colours: &'static [SignatureColour],
    pub suggested_seed: u32,
}

#[derive(Debug, Serialize)]
pub struct Story {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub identity: Identity,
    pub personality: Personality,
    pub recommended: Recommended,
    pub consistency: Consistency,
    pub story: Story,
    pub upgrades: &'static [&'static str],
}

/// Aspect the profile page preselects for its studio links.
pub const PROFILE_ASPECT: &str = "4:5";

impl CharacterProfile {
    /// "NOVA" -> "Nova".
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
            None => String::new(),
        }
    }

    /// Studio link that opens `mode` prefilled with this character's
    /// suggested seed.
    pub fn studio_url(&self, mode: Mode, prompt: Option<&str>) -> String {
        build_studio_url(&StudioLink {
            mode,
            character: self.id,
            seed: Some(i64::from(self.consistency.suggested_seed)),
            aspect: Some(PROFILE_ASPECT),
            prompt,
        })
    }
}

pub fn all() -> &'static [CharacterProfile] {
    PROFILES
}

pub fn profile(id: &str) -> Option<&'static CharacterProfile> {
    PROFILES.iter().find(|p| p.id == id)
}

static PROFILES: &[CharacterProfile] = &[
    CharacterProfile {
        id: "nova",
        name: "NOVA",
        tagline: "The future isn’t coming. I am.",
        identity: Identity {
            style: "Cyberpunk Photoreal",
            energy: "Bold, electric, confident",
            visual_vibe: "Neon reflections, chrome accents, futuristic bokeh",
            signature_look: "Asymmetrical cyberpunk hair + neon dual lighting (blue/magenta)",
        },
        personality: Personality {
            vibe: "Electric confidence with playful teasing",
            interaction_style: "Sharp one-liners, flirty but controlled",
            fantasy_direction: "neon rooftops, hologram lounges, digital skylines, cyber alleys",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 (portrait)", "16:9 (landscape)", "1:1 (close-up)"],
            lighting_styles: &["Neon rim-light (blue + magenta)", "chrome warm fill", "electric ambient"],
            style_modifiers: &[
                "hyperreal",
                "neon cyberpunk",
                "reflective chrome",
                "holographic accents",
                "cinematic bokeh",
                "electric ambience",
                "ultra-detailed",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "NOVA-core",
            face_structure_notes:
                "sharp jawline, neon-lit almond eyes, short asymmetrical cyberpunk hair, confident smirk",
            signature_colours: &[
                SignatureColour { name: "Neon Blue", hex: "#00CFFF" },
                SignatureColour { name: "Magenta", hex: "#FF2FD0" },
                SignatureColour { name: "Chrome Silver", hex: "#C0C8D0" },
            ],
            suggested_seed: 20251201,
        },
        story: Story {
            title: "Nova’s Story",
            body: "NOVA steps out of the neon haze with a confidence that vibrates through the air like a quiet current. Chrome reflections chase her movements, and every glance she gives feels like a challenge. In a city built from light and electricity, she walks as if she owns every circuit.",
        },
        upgrades: &[
            "Unlock Nova’s Premium Neon Scenes",
            "4K Ultra Mode",
            "Night City Pack",
            "Exclusive Neon Variants",
        ],
    },
    CharacterProfile {
        id: "luxe",
        name: "LUXE",
        tagline: "Sin wrapped in silk and soft neon.",
        identity: Identity {
            style: "Soft-neon alt-glam, stylised realism",
            energy: "Slow burn, seductive, self-possessed",
            visual_vibe: "Velvet shadows, tattoos, sparkles of jewelry, studio-style bokeh",
            signature_look:
                "Platinum-blonde waves, black lace or leather, ornate choker, soft magenta lighting on skin",
        },
        personality: Personality {
            vibe: "Velvet-smooth, confident, a little dangerous but always in control",
            interaction_style: "Low-voice flirt, teasing lines, always one step ahead",
            fantasy_direction:
                "Exclusive penthouse lounges, back-room private booths, designer hotel bars, mirror-lit dressing rooms",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 (portraits)", "16:9 (cinematic club scenes)", "2:3 (fashion/editorial)"],
            lighting_styles: &[
                "Soft pink + violet key light",
                "Rim light on hair and shoulders",
                "Occasional golden accent from “bar” light sources",
            ],
            style_modifiers: &[
                "soft neon",
                "alt glam",
                "high-end fashion",
                "shallow depth of field",
                "creamy skin",
                "studio photography",
                "detailed tattoos",
                "cinematic bokeh",
                "glossy lips",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "LUXE-core",
            face_structure_notes:
                "Sharp cheekbones, heart-shaped face, heavy eyeliner, full lips with gloss, relaxed half-smile",
            signature_colours: &[
                SignatureColour { name: "Deep Plum", hex: "#2D0036" },
                SignatureColour { name: "Neon Pink", hex: "#FF4FA8" },
                SignatureColour { name: "Champagne Gold", hex: "#F5D3A8" },
            ],
            suggested_seed: 20251202,
        },
        story: Story {
            title: "Luxe’s Story",
            body: "LUXE doesn’t chase attention, she expects it. She moves through velvet-lit rooms like she owns every couch, curtain, and glass in sight. Tattoos glow under the soft neon while diamonds catch the light when she turns her head.",
        },
        upgrades: &[
            "Unlock Luxe’s Velvet Scenes",
            "Private Lounge Pack",
            "Exclusive Soft-Neon Variants",
            "4K Fashion Mode",
        ],
    },
    CharacterProfile {
        id: "cipher",
        name: "CIPHER",
        tagline: "Every fantasy is a code. She loves cracking them.",
        identity: Identity {
            style: "High-end anime, pastel cyberpunk",
            energy: "Playful, elusive, clever",
            visual_vibe: "Holographic city light, floating UI elements, soft gradients around her",
            signature_look:
                "Long icy-mint or teal twin-tails, big luminous eyes, tech accessories (earpieces, holo-choker)",
        },
        personality: Personality {
            vibe: "Hacker-girlfriend energy: sweet, but knows too much",
            interaction_style: "Emojis, glitch metaphors, clever one-liners",
            fantasy_direction: "Neon rooftops, digital arcades, VR lounges, glowing city balconies at 3am",
        },
        recommended: Recommended {
            aspect_ratios: &["3:4 (anime portraits)", "16:9 (anime scenes)", "1:1 (icon/avatars)"],
            lighting_styles: &[
                "Cyan + pink rim light",
                "Ambient screen glow on face",
                "“Floating HUD” reflections",
            ],
            style_modifiers: &[
                "premium anime",
                "detailed linework",
                "glossy eyes",
                "soft gradients",
                "holographic UI",
                "cyberpunk city",
                "pastel lighting",
                "intricate hair highlights",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "CIPHER-core",
            face_structure_notes: "Big almond eyes, small nose, heart-shaped mouth, slightly flushed cheeks",
            signature_colours: &[
                SignatureColour { name: "Soft Cyan", hex: "#7CF5FF" },
                SignatureColour { name: "Pastel Pink", hex: "#FF9FD7" },
                SignatureColour { name: "Night Lilac", hex: "#241B3C" },
            ],
            suggested_seed: 20251203,
        },
        story: Story {
            title: "Cipher’s Story",
            body: "CIPHER lives between loading screens and late-night rooftops. She reads people the way other girls read chat logs: fast, accurate, and a little too intimately. Neon code scrolls in the reflection of her eyes when she smiles.",
        },
        upgrades: &[
            "Unlock Cipher’s Glitch Scenes",
            "Arcade Night Pack",
            "Pastel Cyber Variants",
            "Streamer Mode Presets",
        ],
    },
    CharacterProfile {
        id: "aria",
        name: "ARIA",
        tagline: "Sunset skin, midnight thoughts.",
        identity: Identity {
            style: "Stylised nightlife realism",
            energy: "Warm, inviting, slightly dangerous after midnight",
            visual_vibe: "Sunset-to-neon gradient, glowing skin, soft haze",
            signature_look:
                "Long dark wavy hair, glowing tan skin, fitted off-shoulder top, backlit by pink/orange panels",
        },
        personality: Personality {
            vibe: "Party starter meets confidante",
            interaction_style: "Casual chatty tone, playful teasing, “you’re with me now” energy",
            fantasy_direction: "Rooftop bars, pool party after-hours, balcony views over a warm city",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 (portraits)", "9:16 (stories/reels)", "16:9 (wide party shots)"],
            lighting_styles: &[
                "Golden-pink sunset key light",
                "Deep magenta rim from behind",
                "Soft bloom around highlights",
            ],
            style_modifiers: &[
                "sunset neon",
                "cinematic nightlife",
                "warm skin tone",
                "soft focus background",
                "minimal grain",
                "glossy highlights",
                "bokeh lights",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "ARIA-core",
            face_structure_notes:
                "Soft jawline, full lips, slightly arched brows, warm brown eyes, relaxed smile that can flip into a smirk",
            signature_colours: &[
                SignatureColour { name: "Sunset Orange", hex: "#FF9966" },
                SignatureColour { name: "Neon Coral", hex: "#FF4F70" },
                SignatureColour { name: "Deep Plum", hex: "#270528" },
            ],
            suggested_seed: 20251204,
        },
        story: Story {
            title: "Aria’s Story",
            body: "ARIA looks like the moment the party finally gets good. She’s already found the best corner, the best light, and the best view. Music from the club below vibrates through the balcony rail as neon spills across her shoulders.",
        },
        upgrades: &[
            "Unlock Aria’s Sunset Scenes",
            "Nightlife Pack",
            "Pool & Rooftop Variants",
            "Warm Glow Mode",
        ],
    },
    CharacterProfile {
        id: "vega",
        name: "VEGA",
        tagline: "She’s the night sky wearing latex.",
        identity: Identity {
            style: "Realistic, high-contrast, minimalist",
            energy: "Calm, dominant, unreadable",
            visual_vibe: "Almost monochrome with star-like highlights",
            signature_look:
                "Jet-black straight hair with blunt bangs, black latex or leather, dark neutral background with faint stars or subtle gradients",
        },
        personality: Personality {
            vibe: "Quiet control, slow and deliberate, the opposite of chaotic",
            interaction_style: "Short replies, precise questions, dry humor",
            fantasy_direction:
                "Luxury penthouse windows at night, minimalist rooms, chrome and glass, star-view decks",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "2:3 fashion", "21:9 ultra-wide cinematic"],
            lighting_styles: &[
                "Single strong key light with deep shadows",
                "Subtle blue rim or star-like speculars",
                "Occasional reflection from windows or glass",
            ],
            style_modifiers: &[
                "high contrast",
                "moody",
                "glossy latex",
                "studio portrait",
                "ultra-detailed eyes",
                "subtle starfield",
                "cinematic shadow",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "VEGA-core",
            face_structure_notes:
                "Straight brows, sharp nose, full bottom lip, intense gaze, bangs just above lashes",
            signature_colours: &[
                SignatureColour { name: "Obsidian", hex: "#05050A" },
                SignatureColour { name: "Star White", hex: "#EAEAF5" },
                SignatureColour { name: "Deep Teal", hex: "#123344" },
            ],
            suggested_seed: 20251205,
        },
        story: Story {
            title: "Vega’s Story",
            body:
                "VEGA doesn’t fill silence—she weaponises it. City lights scatter across her black outfit like constellations every time she turns. She doesn’t raise her voice; she just looks at you until you forget whatever excuse you were going to make. In a world of noise and neon, Vega is the dark line that cuts straight through it.",
        },
        upgrades: &[
            "Unlock Vega’s Night-Mode Scenes",
            "Latex & Leather Pack",
            "Cosmic Window Variants",
            "Monochrome Cinematic Mode",
        ],
    },
    CharacterProfile {
        id: "ember",
        name: "EMBER",
        tagline: "Heat, chrome, and a little bit of trouble.",
        identity: Identity {
            style: "Stylised future-club, glossy and colorful",
            energy: "Hyper, flirty, chaotic fun",
            visual_vibe: "Chrome reflections, neon panels, colourful UI behind her",
            signature_look:
                "Short choppy hair (blue/black or teal), metallic top, layered chains, visible tattoos",
        },
        personality: Personality {
            vibe: "The wildcard in the friend group",
            interaction_style: "Fast replies, memes, voice-note energy, reckless jokes",
            fantasy_direction:
                "Packed dance floors, underground clubs, rooftop raves, arcade-club hybrids",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "16:9 club scenes", "9:16 story verticals"],
            lighting_styles: &[
                "Cyan + magenta + amber tri-colour lighting",
                "Heavy reflections on chrome surfaces",
                "Specular highlights on skin",
            ],
            style_modifiers: &[
                "future rave",
                "holographic chrome",
                "neon haze",
                "high saturation",
                "club photography",
                "motion blur accents",
                "glowing tattoos",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "EMBER-core",
            face_structure_notes:
                "Rounded jaw, small nose ring optional, wide smile, expressive brows",
            signature_colours: &[
                SignatureColour { name: "Electric Cyan", hex: "#1EF2FF" },
                SignatureColour { name: "Hot Magenta", hex: "#FF3FB9" },
                SignatureColour { name: "Ember Orange", hex: "#FF7A3C" },
            ],
            suggested_seed: 20251206,
        },
        story: Story {
            title: "Ember’s Story",
            body:
                "EMBER is the reason the bouncer knows your name. She’s already climbed on the DJ booth twice and made three new friends you’ll probably never see again. Chrome and neon dance across her outfit every time the lights hit, and somehow she always finds the camera. With Ember, every night feels like the screenshot you’re not supposed to show anyone.",
        },
        upgrades: &[
            "Unlock Ember’s Rave Scenes",
            "Chrome Club Pack",
            "Tattoo & Neon Variants",
            "High-Energy Party Mode",
        ],
    },
    CharacterProfile {
        id: "onyx",
        name: "ONYX",
        tagline: "Where the light stops, I begin.",
        identity: Identity {
            style: "Dark Photoreal",
            energy: "Calm, intimidating, composed",
            visual_vibe: "High-contrast shadows, sharp highlights, minimalist framing",
            signature_look:
                "Straight jet-black hair with blunt bangs, black latex or leather, reflective surfaces",
        },
        personality: Personality {
            vibe: "Minimalist, decisive, few words that land hard",
            interaction_style: "Short sentences, controlled tone, occasional dry humour",
            fantasy_direction:
                "High-rise penthouses, stark studios, night highways, chrome interiors",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "2:3 fashion shots"],
            lighting_styles: &["Single-source spotlight", "Coloured rim (crimson or indigo)", "Glossy reflections"],
            style_modifiers: &["high-end editorial", "gloss latex", "studio shadow play"],
        },
        consistency: Consistency {
            embedding_keyword: "ONYX-core",
            face_structure_notes:
                "Oval face, strong jaw, almond eyes, neutral lips, bangs framing eyes",
            signature_colours: &[
                SignatureColour { name: "Black", hex: "#050509" },
                SignatureColour { name: "Deep Crimson", hex: "#A01232" },
                SignatureColour { name: "Steel", hex: "#A9AFC5" },
            ],
            suggested_seed: 20251207,
        },
        story: Story {
            title: "Onyx’s Story",
            body:
                "Onyx doesn’t chase attention—rooms just fall quiet when she arrives. She’s the character you use when you want your generations to feel controlled, sharp and intentionally dangerous.",
        },
        upgrades: &[
            "High-Gloss Portrait Pack",
            "Shadow Studio Scenes",
            "Midnight Highway Series",
            "Chrome Interior Set",
        ],
    },
    CharacterProfile {
        id: "seraph",
        name: "SERAPH",
        tagline: "Soft light, sharp desires.",
        identity: Identity {
            style: "High-end anime with ethereal fantasy twist",
            energy: "Gentle, dreamy, quietly intense",
            visual_vibe: "Cherry blossom haze, pastel gradients, bright but soft highlights",
            signature_look:
                "Pale pastel hair (pink or lavender), delicate features, light flowing outfits, subtle wings or halo motifs (optional)",
        },
        personality: Personality {
            vibe: "Angelic with a secret edge",
            interaction_style:
                "Soft-spoken, affectionate wording, occasional unexpectedly bold comment",
            fantasy_direction:
                "Rooftop gardens, floating temples, lantern-lit balconies, cherry blossom festivals at night",
        },
        recommended: Recommended {
            aspect_ratios: &["3:4 portraits", "9:16 vertical fantasy", "16:9 landscape shots"],
            lighting_styles: &[
                "Soft white + blush pink key light",
                "Glow from petals/lanterns/particles",
                "Light bloom around bright areas",
            ],
            style_modifiers: &[
                "ethereal anime",
                "pastel fantasy",
                "cherry blossoms",
                "soft focus",
                "light particles",
                "glowing fog",
                "painterly highlights",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "SERAPH-core",
            face_structure_notes:
                "Big expressive eyes, small pointed chin, light blush, gentle smile or soft parted lips",
            signature_colours: &[
                SignatureColour { name: "Blossom Pink", hex: "#FFC4E0" },
                SignatureColour { name: "Sky Lilac", hex: "#C0B7FF" },
                SignatureColour { name: "Soft White", hex: "#FDF8FF" },
            ],
            suggested_seed: 20251208,
        },
        story: Story {
            title: "Seraph’s Story",
            body:
                "SERAPH looks like she stepped out of a dream you almost remembered. Petals follow her in the breeze, catching on pastel hair and thin straps as she leans over balcony rails. Her voice feels like the last line of a lullaby you’re not supposed to hear as an adult. When she looks back over her shoulder, it feels less like an invitation and more like destiny.",
        },
        upgrades: &[
            "Unlock Seraph’s Blossom Scenes",
            "Pastel Fantasy Pack",
            "Lantern Night Variants",
            "Soft Dream Mode",
        ],
    },
    CharacterProfile {
        id: "nyx",
        name: "NYX",
        tagline: "Some doors only open in the dark.",
        identity: Identity {
            style: "Neon Noir Anime",
            energy: "Quiet, hypnotic, unpredictable",
            visual_vibe: "Deep purples, soft bloom, sharp highlights on eyes and lips",
            signature_look:
                "Long inky-black hair with violet tips, glowing amethyst eyes, subtle piercings, sheer dark fabrics and chokers",
        },
        personality: Personality {
            vibe: "Mysterious, observant, playful but never fully honest",
            interaction_style:
                "Cryptic lines, short answers that invite follow-ups, rhetorical questions",
            fantasy_direction:
                "Rain-soaked rooftops, empty subway stations, neon-lit alleyways, secret passwords and hidden lounges",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "16:9 cinematic scenes"],
            lighting_styles: &["Low-key contrast", "Rim-lit silhouettes", "Neon reflections (purple / indigo)"],
            style_modifiers: &[
                "neon noir",
                "anime detail",
                "cinematic atmosphere",
                "rain particles",
                "soft lens bloom",
            ],
        },
        consistency: Consistency {
            embedding_keyword: "NYX-core",
            face_structure_notes:
                "Heart-shaped face, large tilted eyes, small nose, full lower lip, slightly arched brows",
            signature_colours: &[
                SignatureColour { name: "Deep Violet", hex: "#6B3EF5" },
                SignatureColour { name: "Black Plum", hex: "#1A0824" },
                SignatureColour { name: "Magenta Accent", hex: "#FF3EA5" },
            ],
            suggested_seed: 20251209,
        },
        story: Story {
            title: "Nyx’s Story",
            body:
                "Nyx is the part of the city that never quite makes it onto the map. She moves between reflections and shadows, turning half-heard rumours into invitations. If Nova is the neon billboard, Nyx is the alley behind it—quiet, charged, and full of possibility.",
        },
        upgrades: &[
            "Unlock Nyx’s Night Secrets",
            "Neon Noir Scene Pack",
            "Rain-Soaked Rooftops",
            "Midnight Metro Set",
        ],
    },
    CharacterProfile {
        id: "riven",
        name: "RIVEN",
        tagline: "Glitches are just windows to better worlds.",
        identity: Identity {
            style: "Cyberpunk Realistic",
            energy: "Restless, hacker-smart, always mid-mission",
            visual_vibe: "Chrome surfaces, HUD overlays, digital artefacts",
            signature_look:
                "Undercut haircut with electric blue streaks, cybernetic implants at temple and neck, techwear harness or jacket",
        },
        personality: Personality {
            vibe: "Witty, impatient, problem-solver",
            interaction_style: "Fast replies, technical metaphors, playful “system status” jokes",
            fantasy_direction:
                "Data heists, rooftop terminals, glowing code waterfalls, underground servers",
        },
        recommended: Recommended {
            aspect_ratios: &["16:9 action shots", "4:5 portraits", "9:16 hacker-screen verticals"],
            lighting_styles: &["Blue-cyan key light + magenta back light", "Monitor glow", "Hologram reflections"],
            style_modifiers: &["hyper-real cyberpunk", "volumetric light", "interface overlays", "glitch trails"],
        },
        consistency: Consistency {
            embedding_keyword: "RIVEN-core",
            face_structure_notes:
                "Strong cheekbones, straight nose, focused gaze, small scar on eyebrow",
            signature_colours: &[
                SignatureColour { name: "Electric Cyan", hex: "#00E2FF" },
                SignatureColour { name: "Magenta", hex: "#FF2ACB" },
                SignatureColour { name: "Dark Graphite", hex: "#14161F" },
            ],
            suggested_seed: 20251210,
        },
        story: Story {
            title: "Riven’s Story",
            body:
                "Riven doesn’t break into systems—she convinces them they invited her. In her world, firewalls are puzzles and error messages are flirting. Every new prompt feels like a fresh exploit waiting to be discovered.",
        },
        upgrades: &[
            "Cyber Heist Pack",
            "Terminal Room Scenes",
            "Glitch Portrait Series",
            "HUD Overlay Toolkit",
        ],
    },
    CharacterProfile {
        id: "solaris",
        name: "SOLARIS",
        tagline: "City lights are just practice for the stars.",
        identity: Identity {
            style: "Cosmic Realism",
            energy: "Warm, optimistic, star-struck",
            visual_vibe: "Night skies, lens flares, atmospheric glow",
            signature_look:
                "Long loose hair with subtle golden highlights, soft shimmer makeup, reflective fabrics",
        },
        personality: Personality {
            vibe: "Gentle, curious, big-picture dreamer",
            interaction_style: "Positive affirmations, poetic language, space metaphors",
            fantasy_direction:
                "Rooftop stargazing, observatory domes, desert skies, seaside night walks",
        },
        recommended: Recommended {
            aspect_ratios: &["16:9 wide scenes", "4:5 romantic close-ups"],
            lighting_styles: &["Golden rim light", "Moonlight blue fill", "Starfield reflection in eyes"],
            style_modifiers: &["cinematic night", "starfield bokeh", "soft focus", "atmospheric haze"],
        },
        consistency: Consistency {
            embedding_keyword: "SOLARIS-core",
            face_structure_notes:
                "Soft oval face, gentle smile, bright eyes with subtle catchlights",
            signature_colours: &[
                SignatureColour { name: "Starlight Gold", hex: "#FFDA7B" },
                SignatureColour { name: "Midnight Blue", hex: "#021534" },
                SignatureColour { name: "Soft Violet", hex: "#B792FF" },
            ],
            suggested_seed: 20251211,
        },
        story: Story {
            title: "Solaris’s Story",
            body:
                "Solaris treats every city like a constellation and every window like a star. She’s the go-to muse when you want your images to feel romantic, hopeful and bigger than the street they were born on.",
        },
        upgrades: &[
            "Rooftop Constellation Pack",
            "Desert Night Scenes",
            "Cosmic Portrait Series",
            "Aurora Backdrop Set",
        ],
    },
    CharacterProfile {
        id: "astra",
        name: "ASTRA",
        tagline: "Soft light, sharp intentions.",
        identity: Identity {
            style: "Soft Neon Anime",
            energy: "Friendly but sharp, high social IQ",
            visual_vibe: "Pastel neons, gentle gradients, club-lounge glow",
            signature_look: "Shoulder-length pastel hair, off-shoulder tops, delicate jewellery",
        },
        personality: Personality {
            vibe: "Charming host, reads the room instantly",
            interaction_style: "Warm compliments, teasing questions, very reactive to user mood",
            fantasy_direction:
                "Rooftop bars, glass balconies, lounge corners, sunset-into-night transitions",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "9:16 vertical “poster” style"],
            lighting_styles: &["Soft pink + warm amber key light", "Light bloom", "Pastel signage in background"],
            style_modifiers: &["anime soft shading", "pastel neon", "skin glow", "subtle grain"],
        },
        consistency: Consistency {
            embedding_keyword: "ASTRA-core",
            face_structure_notes:
                "Large expressive eyes, small pointed chin, gentle nose, heart-shaped lips",
            signature_colours: &[
                SignatureColour { name: "Soft Pink", hex: "#FF8BC9" },
                SignatureColour { name: "Peach", hex: "#FFB47A" },
                SignatureColour { name: "Lavender", hex: "#C694FF" },
            ],
            suggested_seed: 20251212,
        },
        story: Story {
            title: "Astra’s Story",
            body:
                "Astra is the first face you see at the door of your favourite night spot—the one who already knows your order and your mood. She’s perfect for bright, inviting scenes that still feel premium.",
        },
        upgrades: &[
            "Soft Neon Portrait Pack",
            "Rooftop Lounge Scenes",
            "Pastel Night Posters",
            "Golden Hour Neon Mix",
        ],
    },
    CharacterProfile {
        id: "echo",
        name: "ECHO",
        tagline: "Every signal leaves an echo.",
        identity: Identity {
            style: "Stylised Cyber Glow",
            energy: "Playful, glitch-y, slightly chaotic",
            visual_vibe: "Holograms, shifting colours, duplicated silhouettes",
            signature_look:
                "Short asymmetrical haircut, bright streaks, futuristic headphones or visor, holographic jacket",
        },
        personality: Personality {
            vibe: "Meme-ready, reactive, chaotic good",
            interaction_style: "Rapid-fire quips, sound-effect text, “buffering…” jokes",
            fantasy_direction: "DJ booths, digital concerts, signal towers, streaming overlays",
        },
        recommended: Recommended {
            aspect_ratios: &["1:1 covers", "9:16 social clips", "4:5 portraits"],
            lighting_styles: &["RGB split lighting", "Hologram glow", "Duplicated frames"],
            style_modifiers: &["stylised cyber", "RGB shift", "motion blur", "music visualizer"],
        },
        consistency: Consistency {
            embedding_keyword: "ECHO-core",
            face_structure_notes:
                "Round face, mischievous smile, big eyes, slightly tilted head in many shots",
            signature_colours: &[
                SignatureColour { name: "Cyan", hex: "#21F4FF" },
                SignatureColour { name: "Hot Pink", hex: "#FF3F93" },
                SignatureColour { name: "Lime Accent", hex: "#C5FF3C" },
            ],
            suggested_seed: 20251213,
        },
        story: Story {
            title: "Echo’s Story",
            body:
                "Echo lives where audio peaks into distortion and chat scrolls too fast to read. She’s the perfect avatar for anything that feels like a live stream, a concert, or a feed that never sleeps.",
        },
        upgrades: &["Stream Overlay Pack", "Neon DJ Booth Scenes", "Glitch Portraits", "RGB Motion Series"],
    },
    CharacterProfile {
        id: "faye",
        name: "FAYE",
        tagline: "Too soft to be real, too sharp to be a dream.",
        identity: Identity {
            style: "Ethereal Stylised",
            energy: "Calm, floaty, almost otherworldly",
            visual_vibe: "Mist, petals, fog, soft glows",
            signature_look: "Long pale hair, flowing fabrics, soft ribbons, bare shoulders",
        },
        personality: Personality {
            vibe: "Gentle, supportive, quietly teasing",
            interaction_style: "Slow paced, story-like; expressive but never overdone",
            fantasy_direction:
                "Misty gardens, moonlit lakes, overgrown ruins, soft bedroom windows",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "3:2 romantic scenes"],
            lighting_styles: &["Backlit haze", "Rim light", "Desaturated backgrounds with colour pop on character"],
            style_modifiers: &["ethereal glow", "mist particles", "soft focus", "dreamy fantasy"],
        },
        consistency: Consistency {
            embedding_keyword: "FAYE-core",
            face_structure_notes: "Soft round features, full lips, dreamy eyes, relaxed brows",
            signature_colours: &[
                SignatureColour { name: "Pearl", hex: "#F8F5FF" },
                SignatureColour { name: "Mist Lavender", hex: "#D5C6FF" },
                SignatureColour { name: "Soft Rose", hex: "#F3A8C9" },
            ],
            suggested_seed: 20251214,
        },
        story: Story {
            title: "Faye’s Story",
            body:
                "Faye feels like a scene you half-remember from a dream. She’s ideal when you want your generations to feel romantic, slow, and gently unreal.",
        },
        upgrades: &["Dream Garden Pack", "Moonlit Lake Series", "Window Light Portraits", "Soft Fantasy Set"],
    },
    CharacterProfile {
        id: "dahlia",
        name: "DAHLIA",
        tagline: "Velvet nights, dangerous smiles.",
        identity: Identity {
            style: "Velvet Stylised Glam",
            energy: "Slow, sultry, assured",
            visual_vibe: "Deep reds, soft fabrics, rich textures",
            signature_look:
                "Dark wavy hair, deep lipstick, velvet dresses or tops, jewellery catching candlelight or bar light",
        },
        personality: Personality {
            vibe: "Seductive, composed, playful power dynamic",
            interaction_style: "Long sentences, deliberate pacing, compliments with a bite",
            fantasy_direction: "Lounge booths, jazz clubs, velvet sofas, dim hotel bars",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "21:9 cinematic bar shots"],
            lighting_styles: &["Warm candle / tungsten light", "Strong falloff", "Background blur"],
            style_modifiers: &["velvet texture", "rich bokeh", "cinematic bar scene", "film grain"],
        },
        consistency: Consistency {
            embedding_keyword: "DAHLIA-core",
            face_structure_notes:
                "Defined cheekbones, heavy-lidded eyes, prominent lips, slightly arched brows",
            signature_colours: &[
                SignatureColour { name: "Velvet Red", hex: "#8E1232" },
                SignatureColour { name: "Wine", hex: "#3A0712" },
                SignatureColour { name: "Gold Accent", hex: "#FFCF6F" },
            ],
            suggested_seed: 20251215,
        },
        story: Story {
            title: "Dahlia’s Story",
            body:
                "Dahlia is the character you choose when the scene needs to feel expensive and just a little dangerous. Every frame should look like it belongs on a limited-edition poster.",
        },
        upgrades: &[
            "Velvet Lounge Pack",
            "Jazz Club Scenes",
            "Candlelit Portraits",
            "Wine-Red Poster Series",
        ],
    },
    CharacterProfile {
        id: "marrow",
        name: "MARROW",
        tagline: "Pretty on the surface, haunted underneath.",
        identity: Identity {
            style: "Dark Stylised / Gothic Neon",
            energy: "Intense, introspective, slightly eerie",
            visual_vibe:
                "Smoke, cracked light, sharp contrast, occasional bone / lace motifs (SFW)",
            signature_look:
                "Pale skin, dark eye makeup, messy dark hair with white streak, black lace or structured outfits",
        },
        personality: Personality {
            vibe: "Honest to a fault, dark humour, emotionally deep",
            interaction_style: "Confessional tone, metaphor-heavy, jokes about fears and ghosts",
            fantasy_direction:
                "Abandoned theatres, foggy streets, candlelit rooms, rain-streaked windows",
        },
        recommended: Recommended {
            aspect_ratios: &["4:5 portraits", "16:9 narrative scenes"],
            lighting_styles: &["Split lighting", "Cold blue fill with warm candle points", "Fog / smoke volume"],
            style_modifiers: &["gothic neon", "dramatic shadows", "smoke", "cinematic horror-lite"],
        },
        consistency: Consistency {
            embedding_keyword: "MARROW-core",
            face_structure_notes:
                "Sharp nose, hollowed cheeks, intense eyes, small mouth with defined cupid’s bow",
            signature_colours: &[
                SignatureColour { name: "Bone White", hex: "#F5F3F0" },
                SignatureColour { name: "Blood Red", hex: "#C0132C" },
                SignatureColour { name: "Deep Obsidian", hex: "#050308" },
                SignatureColour { name: "Poison Violet", hex: "#8C37FF" },
            ],
            suggested_seed: 20251216,
        },
        story: Story {
            title: "Marrow’s Story",
            body:
                "Marrow is where the studio edges into the uncanny without ever crossing a line. She’s the avatar for users who want their prompts to feel like a beautiful nightmare they can still wake up from.",
        },
        upgrades: &[
            "Gothic Theatre Pack",
            "Foggy Street Series",
            "Candle & Shadow Portraits",
            "Neon Horror-Lite Scenes",
        ],
    },
];
