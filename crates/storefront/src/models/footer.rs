//! Static footer content.

/// A plain link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// A titled column of links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

/// A social network profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Hover colour class.
    pub accent: &'static str,
}

const fn link(name: &'static str, href: &'static str) -> FooterLink {
    FooterLink { name, href }
}

pub const SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Shop",
        links: &[
            link("New Arrivals", "/new-arrivals"),
            link("Best Sellers", "/best-sellers"),
            link("Sale Items", "/sale"),
            link("Men's Collection", "/mens"),
            link("Women's Collection", "/womens"),
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            link("About Us", "/about"),
            link("Careers", "/careers"),
            link("Our Stores", "/stores"),
            link("Terms & Conditions", "/terms"),
            link("Privacy Policy", "/privacy"),
        ],
    },
    FooterSection {
        title: "Help",
        links: &[
            link("Customer Service", "/customer-service"),
            link("Track Order", "/track-order"),
            link("Returns & Exchanges", "/returns"),
            link("Shipping Info", "/shipping"),
            link("Contact Us", "/contact"),
        ],
    },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com",
        accent: "hover-pink",
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com",
        accent: "hover-sky",
    },
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com",
        accent: "hover-blue",
    },
    SocialLink {
        name: "YouTube",
        href: "https://youtube.com",
        accent: "hover-red",
    },
];

pub const CONTACT_EMAIL: &str = "info@sharpstyle.com";
pub const CONTACT_PHONE: &str = "+1 (212) 555-1234";
pub const CONTACT_PHONE_HREF: &str = "tel:+12125551234";
