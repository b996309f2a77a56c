//! Presentational content of the landing page

use serde::Serialize;

pub const BUSINESS_NAME: &str = "EHD Detailing";
pub const PHONE_LINK: &str = "tel:+447436778666";
pub const EMAIL_LINK: &str = "mailto:info@ehddetailing.com";
pub const WHATSAPP_LINK: &str =
    "https://wa.me/447436778666?text=Hi%20EHD%20Detailing%2C%20I%27d%20like%20a%20quote%20for%20my%20car.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub business_name: &'static str,
    pub tagline: &'static str,
    pub hero_title: &'static str,
    pub hero_text: &'static str,
    pub hero_image: &'static str,
    pub logo: &'static str,
    pub about: &'static str,
    pub nav: Vec<NavLink>,
    pub services: Vec<Service>,
    pub packages: Vec<Package>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub gallery: Vec<GalleryImage>,
}

pub const GALLERY_PATHS: &[&str] = &[
    "/images/gallery/gwagen-gloss.jpg",
    "/images/gallery/paint-correction-before-after.jpg",
    "/images/gallery/ceramic-beading.jpg",
    "/images/gallery/interior-steam.jpg",
    "/images/gallery/seats-extracted.jpg",
    "/images/gallery/engine-bay.jpg",
    "/images/gallery/alloy-detail.jpg",
    "/images/gallery/foam-prewash.jpg",
    "/images/gallery/headlight-restoration.jpg",
    "/images/gallery/range-rover-finish.jpg",
    "/images/gallery/golf-r-side.jpg",
    "/images/gallery/motorbike-polish.jpg",
];

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            business_name: BUSINESS_NAME,
            tagline: "Eye-catching High-gloss Details",
            hero_title: "Professional Vehicle Detailing in Bathgate. Excellence in Each Detail. Make Your Vehicle Feel New Again!",
            hero_text: "Deep Cleaning, Steam Cleaning, Pet Hair Removal, Odour Removal, Engine Bay Detail, Paint Corrections / Polishing, Ceramic Coatings, Any Size / Type of Vehicle! Transform your Car!",
            hero_image: "/images/hero-gwagen.jpg",
            logo: "/images/ehd-logo.png",
            about: "At EHD Detailing, we believe perfection is in the details. With care and precision we aim to achieve mirror like finishes and spotless interiors. We don't just clean, we elevate your vehicle's entire presence. Whether it's a daily driver or a showpiece, we treat every car like it's our own. Book with us today and transform your vehicle.",
            nav: vec![
                NavLink { href: "#services", label: "Services" },
                NavLink { href: "#packages", label: "Packages" },
                NavLink { href: "#gallery", label: "Gallery" },
                NavLink { href: "#process", label: "Process" },
                NavLink { href: "#testimonials", label: "Reviews" },
                NavLink { href: "#contact", label: "Contact" },
                NavLink { href: "#faq", label: "FAQ" },
            ],
            services: vec![
                Service {
                    icon: "car",
                    title: "Paint Correction",
                    description: "Remove swirls, haze, and light defects for true clarity.",
                },
                Service {
                    icon: "droplets",
                    title: "Ceramic Coating",
                    description: "Long-lasting protection and insane hydrophobic behavior.",
                },
                Service {
                    icon: "sparkles",
                    title: "Interior Deep Clean",
                    description: "Steam, sanitize, and protect every surface.",
                },
                Service {
                    icon: "check",
                    title: "Maintenance Wash",
                    description: "Safe contact wash to preserve your finish.",
                },
            ],
            packages: vec![
                Package {
                    name: "Standard Valet",
                    price: "From £45",
                    features: &[
                        "Prewash & handwash",
                        "Wheels cleaned",
                        "Interior hoover",
                        "Dash & centre console cleaned",
                        "Plastics wiped down",
                        "Air freshener",
                    ],
                    highlight: false,
                },
                Package {
                    name: "Full Valet",
                    price: "From £75",
                    features: &[
                        "Seats & carpets shampooed",
                        "Leather treatment & interior protection",
                        "Arches cleaned & hand dried",
                        "Exterior wax, vinyl trims dressed",
                        "Tar spot removal & exhaust tips polished",
                        "Alloy protection & glass sealant applied",
                    ],
                    highlight: false,
                },
                Package {
                    name: "Deep Clean",
                    price: "From £135",
                    features: &[
                        "Seats shampooed and extracted",
                        "Full steam clean / full safe wash",
                        "Full paintwork decontamination",
                        "12 month protective coating",
                        "Wheel sealant & glass sealant",
                        "Engine bay detailed",
                    ],
                    highlight: false,
                },
                Package {
                    name: "Maintenance Valet",
                    price: "From £40-50",
                    features: &[
                        "Post full valet / deep clean upkeep",
                        "Keep vehicle at best possible standard",
                        "Guaranteed slots every 4–6 weeks",
                        "Deep clean standards maintained every time",
                    ],
                    highlight: false,
                },
                Package {
                    name: "Extras",
                    price: "Add-ons",
                    features: &[
                        "Pet Hair Removal — £10",
                        "Steam Clean — £15",
                        "Engine Bay Detail — £20",
                        "7 Seater extra — £15",
                        "Machine Polishing — From £50",
                        "Motorbikes — From £40",
                    ],
                    highlight: false,
                },
                Package {
                    name: "Terms & Conditions",
                    price: "",
                    features: &[
                        "Prices based on average condition of vehicle",
                        "Heavily soiled vehicles (dirt, pet hair, vomit) may incur extra charges",
                        "Cancellation within 24 hrs of appointment may incur a charge",
                    ],
                    highlight: false,
                },
            ],
            process: vec![
                ProcessStep {
                    title: "Assessment",
                    description: "We inspect paint and interior to prescribe the perfect treatment.",
                },
                ProcessStep {
                    title: "Decontamination",
                    description: "Citrus pre-wash, foam, contact wash, clay, and iron removal.",
                },
                ProcessStep {
                    title: "Correction",
                    description: "Machine polishing to remove swirls and unveil clarity.",
                },
                ProcessStep {
                    title: "Protection",
                    description: "Sealants or ceramic coatings for durable, easy-clean gloss.",
                },
            ],
            testimonials: vec![
                Testimonial { name: "Jamie", text: "Incredible results. My black paint looks like a mirror now." },
                Testimonial { name: "Priya", text: "Professional, punctual, and meticulous. Worth every penny." },
                Testimonial { name: "Owen", text: "The ceramic coating makes washing a breeze. 10/10 shine." },
                Testimonial { name: "Amir", text: "Attention to detail is unreal. My interior looks brand new." },
            ],
            faqs: vec![
                Faq {
                    question: "How long does a full detail take?",
                    answer: "Typically 3–6 hours depending on vehicle size and package. Correction/coatings can extend to a full day.",
                },
                Faq {
                    question: "Do you offer mobile service?",
                    answer: "At the moment, we operate exclusively from our fully equipped detailing unit. This controlled environment allows us to deliver the highest quality results, with the right tools, lighting, and conditions to care for your vehicle properly.",
                },
                Faq {
                    question: "How long does ceramic coating last?",
                    answer: "Our coatings range from 6–12 months (sealant) up to multi-year systems, depending on maintenance and package.",
                },
                Faq {
                    question: "How do I book?",
                    answer: "Message us on WhatsApp with your car model, condition, and goals. We'll confirm availability and pricing.",
                },
            ],
            gallery: GALLERY_PATHS
                .iter()
                .enumerate()
                .map(|(i, src)| GalleryImage::new(*src, format!("Detailing image {}", i + 1)))
                .collect(),
        }
    }
}

impl SiteContent {
    pub fn whatsapp_link(&self) -> &'static str {
        WHATSAPP_LINK
    }

    pub fn phone_link(&self) -> &'static str {
        PHONE_LINK
    }

    pub fn email_link(&self) -> &'static str {
        EMAIL_LINK
    }
}
