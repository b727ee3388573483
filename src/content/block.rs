//! Opaque content blocks.
//!
//! A [`ContentBlock`] is an ordered list of [`Element`]s built from `'static`
//! data. The panel bodies below are the only content blocks in the app.

/// A run of paragraph text, optionally emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub text: &'static str,
    pub emphasis: bool,
}

/// A titled card with a short body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// A big number with a caption underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Heading(&'static str),
    Paragraph(&'static [Run]),
    /// Card holding a bullet list.
    Bullets {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Grid of title/body cards.
    Cards {
        title: Option<&'static str>,
        cards: &'static [Card],
    },
    /// Boxed list of title/description pairs.
    Details {
        title: &'static str,
        entries: &'static [Card],
    },
    Stats(&'static [Stat]),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub elements: &'static [Element],
}

impl ContentBlock {
    pub const fn new(elements: &'static [Element]) -> Self {
        Self { elements }
    }
}

pub const OVERVIEW: ContentBlock = ContentBlock::new(&[
    Element::Heading("TensorFlow Lite Edge AI"),
    Element::Paragraph(&[
        Run {
            text: "A lightweight image classification model trained to recognize recyclable \
                   items in real-time. The model is optimized for edge devices like Raspberry Pi, \
                   achieving ",
            emphasis: false,
        },
        Run { text: "35ms inference time", emphasis: true },
        Run { text: " with less than 2MB footprint.", emphasis: false },
    ]),
    Element::Bullets {
        title: "5 Recyclable Classes",
        items: &[
            "Plastic bottles & containers",
            "Paper & cardboard",
            "Glass jars & bottles",
            "Metal cans",
            "Organic waste",
        ],
    },
    Element::Bullets {
        title: "Deployment Options",
        items: &[
            "Raspberry Pi 4/Zero",
            "Mobile devices (Android/iOS)",
            "Google Colab",
            "Desktop/Laptop",
            "Microcontrollers",
        ],
    },
]);

pub const FEATURES: ContentBlock = ContentBlock::new(&[
    Element::Heading("Key Features"),
    Element::Cards {
        title: None,
        cards: &[
            Card { title: "Real-Time Inference", body: "Process images in 10-50ms on edge devices" },
            Card { title: "Model Quantization", body: "Float16 quantization reduces model size by 50%" },
            Card { title: "Privacy First", body: "All processing happens on-device, no data transmission" },
            Card { title: "Low Power", body: "Runs on <5W power consumption" },
            Card { title: "Open Source", body: "MIT Licensed, community-driven development" },
            Card { title: "Easy Deployment", body: "Automated scripts for Raspberry Pi setup" },
        ],
    },
]);

pub const AGRICULTURE: ContentBlock = ContentBlock::new(&[
    Element::Heading("AI-IoT Smart Agriculture"),
    Element::Paragraph(&[Run {
        text: "A conceptual framework integrating IoT sensors with edge AI for precision farming \
               optimization.",
        emphasis: false,
    }]),
    Element::Details {
        title: "System Components",
        entries: &[
            Card {
                title: "Sensors (7 types)",
                body: "Soil moisture, temperature, pH, NPK, light, cameras, weather",
            },
            Card {
                title: "Edge AI Models",
                body: "Disease detection, pest identification, yield prediction, irrigation optimization",
            },
            Card {
                title: "Measured Benefits",
                body: "30-50% water savings • 20-40% yield increase • 60-80% labor reduction",
            },
        ],
    },
    Element::Stats(&[
        Stat { value: "30-50%", caption: "Water Savings" },
        Stat { value: "20-40%", caption: "Yield Increase" },
        Stat { value: "60-80%", caption: "Labor Reduction" },
    ]),
]);

pub const QUANTUM: ContentBlock = ContentBlock::new(&[
    Element::Heading("Quantum AI vs Classical AI"),
    Element::Table {
        headers: &["Aspect", "Classical AI", "Quantum AI"],
        rows: &[
            &["Processing", "Sequential/Limited Parallel", "Massive Parallelism"],
            &["Problem Size", "~1000 variables", "Exponentially Larger"],
            &["Speed", "Polynomial/Exponential", "Quantum Speedup"],
            &["Maturity", "Production-Ready", "Research Stage"],
        ],
    },
    Element::Cards {
        title: Some("6 Industries Benefiting from Quantum AI"),
        cards: &[
            Card { title: "Pharmaceuticals", body: "Drug discovery: 10+ years → 2-3 years" },
            Card { title: "Finance", body: "Portfolio optimization for trillion-dollar assets" },
            Card { title: "Logistics", body: "DHL: 30% reduction in delivery costs" },
            Card { title: "Energy", body: "Accelerated clean technology development" },
            Card { title: "Materials Science", body: "Revolutionary batteries & solar cells" },
            Card { title: "Cryptography", body: "Quantum-resistant encryption development" },
        ],
    },
]);
