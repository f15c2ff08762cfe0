//! Reference license documents compiled into the binary.
//!
//! Order matters: it is the tie-break order of the matcher.

pub struct Asset {
    pub name: &'static str,
    pub content: &'static str,
}

pub const ASSETS: &[Asset] = &[
    Asset {
        name: "agpl-3.0.txt",
        content: include_str!("../../assets/licenses/agpl-3.0.txt"),
    },
    Asset {
        name: "bsd-2-clause.txt",
        content: include_str!("../../assets/licenses/bsd-2-clause.txt"),
    },
    Asset {
        name: "bsd-3-clause.txt",
        content: include_str!("../../assets/licenses/bsd-3-clause.txt"),
    },
    Asset {
        name: "epl-1.0.txt",
        content: include_str!("../../assets/licenses/epl-1.0.txt"),
    },
    Asset {
        name: "gpl-2.0.txt",
        content: include_str!("../../assets/licenses/gpl-2.0.txt"),
    },
    Asset {
        name: "gpl-3.0.txt",
        content: include_str!("../../assets/licenses/gpl-3.0.txt"),
    },
    Asset {
        name: "isc.txt",
        content: include_str!("../../assets/licenses/isc.txt"),
    },
    Asset {
        name: "lgpl-2.1.txt",
        content: include_str!("../../assets/licenses/lgpl-2.1.txt"),
    },
    Asset {
        name: "mit.txt",
        content: include_str!("../../assets/licenses/mit.txt"),
    },
    Asset {
        name: "mpl-2.0.txt",
        content: include_str!("../../assets/licenses/mpl-2.0.txt"),
    },
    Asset {
        name: "ms-pl.txt",
        content: include_str!("../../assets/licenses/ms-pl.txt"),
    },
    Asset {
        name: "ms-rl.txt",
        content: include_str!("../../assets/licenses/ms-rl.txt"),
    },
    Asset {
        name: "osl-3.0.txt",
        content: include_str!("../../assets/licenses/osl-3.0.txt"),
    },
    Asset {
        name: "unlicense.txt",
        content: include_str!("../../assets/licenses/unlicense.txt"),
    },
];
