//! Supported resolutions, their register settings and the pad format.

mod tables;

use tables::*;

/// One 8-bit register write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reg {
    pub address: u16,
    pub value: u8,
}

impl Reg {
    pub const fn new(address: u16, value: u8) -> Self {
        Self { address, value }
    }
}

/// The only media bus code the sensor produces (10-bit GRBG bayer).
pub const MEDIA_BUS_FMT_SGRBG10_1X10: u32 = 0x300a;

/// Frame time used by every mode at 30 fps.
pub const VTS_30FPS: u32 = 0x0808;
pub const VTS_MAX: u32 = 0xffff;

/// Pixels per line. HTS is fixed for all resolutions.
pub const FIXED_PPL: u32 = 2724;

pub const LINK_FREQ_422MHZ: i64 = 422_400_000;

/// PLL configuration for one MIPI link frequency.
#[derive(Debug)]
pub struct LinkFreqConfig {
    pub link_freq: i64,
    /// link_freq * 2 * nr_of_lanes / bits_per_sample
    pub pixel_rate: i64,
    pub regs: &'static [Reg],
}

pub static LINK_FREQ_CONFIGS: [LinkFreqConfig; 1] = [LinkFreqConfig {
    link_freq: LINK_FREQ_422MHZ,
    pixel_rate: (LINK_FREQ_422MHZ * 2 * 2) / 10,
    regs: MIPI_DATA_RATE_840MBPS,
}];

#[derive(Debug)]
pub struct SupportedMode {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Default vertical timing size
    pub vts_def: u32,
    /// Minimum vertical timing size
    pub vts_min: u32,
    /// Index into [`LINK_FREQ_CONFIGS`]
    pub link_freq_index: usize,
    pub regs: &'static [Reg],
}

impl SupportedMode {
    pub fn link_freq(&self) -> &'static LinkFreqConfig {
        &LINK_FREQ_CONFIGS[self.link_freq_index]
    }

    /// Distance used for nearest-size matching.
    fn distance(&self, width: u32, height: u32) -> u64 {
        u64::from(self.width.abs_diff(width)) + u64::from(self.height.abs_diff(height))
    }
}

/// Full field of view modes.
/// 4:3  ==> {2592x1944, 1296x972, 648x486}
/// 16:9 ==> {2560x1440, 1280x720, 640x360}
pub static SUPPORTED_MODES: [SupportedMode; 6] = [
    SupportedMode {
        width: 2592,
        height: 1944,
        vts_def: VTS_30FPS,
        vts_min: VTS_30FPS,
        link_freq_index: 0,
        regs: MODE_2592X1944_REGS,
    },
    SupportedMode {
        width: 1296,
        height: 972,
        vts_def: VTS_30FPS,
        vts_min: 996,
        link_freq_index: 0,
        regs: MODE_1296X972_REGS,
    },
    SupportedMode {
        width: 648,
        height: 486,
        vts_def: VTS_30FPS,
        vts_min: 516,
        link_freq_index: 0,
        regs: MODE_648X486_REGS,
    },
    SupportedMode {
        width: 2560,
        height: 1440,
        vts_def: VTS_30FPS,
        vts_min: VTS_30FPS,
        link_freq_index: 0,
        regs: MODE_2560X1440_REGS,
    },
    SupportedMode {
        width: 1280,
        height: 720,
        vts_def: VTS_30FPS,
        vts_min: 1020,
        link_freq_index: 0,
        regs: MODE_1280X720_REGS,
    },
    SupportedMode {
        width: 640,
        height: 360,
        vts_def: VTS_30FPS,
        vts_min: 510,
        link_freq_index: 0,
        regs: MODE_640X360_REGS,
    },
];

/// Picks the entry of `modes` closest to the requested size.
///
/// Distance is `|w - width| + |h - height|`; on a tie the entry listed first wins.
pub fn nearest_mode(modes: &[SupportedMode], width: u32, height: u32) -> Option<&SupportedMode> {
    let mut best: Option<&SupportedMode> = None;
    for mode in modes {
        let better = match best {
            Some(b) => mode.distance(width, height) < b.distance(width, height),
            None => true,
        };
        if better {
            best = Some(mode);
        }
    }
    best
}

/// [`nearest_mode`] over [`SUPPORTED_MODES`].
pub fn select_mode(width: u32, height: u32) -> &'static SupportedMode {
    // The table is never empty.
    nearest_mode(&SUPPORTED_MODES, width, height).unwrap_or(&SUPPORTED_MODES[0])
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatWhich {
    /// Scratch format negotiated by an open file handle.
    Try,
    /// Format the hardware is programmed with.
    Active,
}

/// Pad format. The field order is always progressive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Format {
    pub width: u32,
    pub height: u32,
    pub code: u32,
}

impl Format {
    pub fn from_mode(mode: &SupportedMode) -> Self {
        Self {
            width: mode.width,
            height: mode.height,
            code: MEDIA_BUS_FMT_SGRBG10_1X10,
        }
    }
}

/// Size range reported for one frame size index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameSize {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}
