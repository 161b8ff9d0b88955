//! User-visible sensor controls and their ranges.

use crate::mode::{SupportedMode, FIXED_PPL, LINK_FREQ_CONFIGS, VTS_MAX};
use crate::Error;

pub const ANALOG_GAIN_MIN: i64 = 0;
pub const ANALOG_GAIN_MAX: i64 = 8191;
pub const ANALOG_GAIN_DEFAULT: i64 = 128;

pub const DGTL_GAIN_MIN: i64 = 0;
pub const DGTL_GAIN_MAX: i64 = 4095;
pub const DGTL_GAIN_DEFAULT: i64 = 1024;

pub const EXPOSURE_MIN: i64 = 4;

/// Test pattern menu entries.
pub const TEST_PATTERN_MENU: [&str; 2] = ["Disabled", "Vertical Color Bar Type 1"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlId {
    /// Index into the link frequency menu
    LinkFreq,
    PixelRate,
    VerticalBlank,
    HorizontalBlank,
    AnalogueGain,
    DigitalGain,
    /// Exposure time in lines
    Exposure,
    /// Index into [`TEST_PATTERN_MENU`]
    TestPattern,
}

impl ControlId {
    /// Controls written to the sensor, in the order they are restored on stream start.
    pub const WRITABLE: [ControlId; 5] = [
        ControlId::VerticalBlank,
        ControlId::AnalogueGain,
        ControlId::DigitalGain,
        ControlId::Exposure,
        ControlId::TestPattern,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInfo {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
    pub value: i64,
    pub read_only: bool,
}

impl ControlInfo {
    const fn new(min: i64, max: i64, default: i64) -> Self {
        Self {
            min,
            max,
            step: 1,
            default,
            value: default,
            read_only: false,
        }
    }

    const fn fixed(value: i64) -> Self {
        Self {
            min: value,
            max: value,
            step: 1,
            default: value,
            value,
            read_only: true,
        }
    }

    /// Replaces the range, clamping the current value into it.
    fn modify_range(&mut self, min: i64, max: i64, default: i64) {
        self.min = min;
        self.max = max;
        self.default = default;
        self.value = self.value.clamp(min, max);
    }
}

/// Control values for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    height: i64,
    link_freq: ControlInfo,
    pixel_rate: ControlInfo,
    vblank: ControlInfo,
    hblank: ControlInfo,
    analogue_gain: ControlInfo,
    digital_gain: ControlInfo,
    exposure: ControlInfo,
    test_pattern: ControlInfo,
}

impl Controls {
    pub fn new(mode: &SupportedMode) -> Self {
        let exposure_max = i64::from(mode.vts_def) - 8;
        let mut link_freq = ControlInfo::fixed(mode.link_freq_index as i64);
        link_freq.min = 0;
        link_freq.max = LINK_FREQ_CONFIGS.len() as i64 - 1;
        let mut controls = Self {
            height: i64::from(mode.height),
            link_freq,
            pixel_rate: ControlInfo::fixed(mode.link_freq().pixel_rate),
            vblank: ControlInfo::new(0, 0, 0),
            hblank: ControlInfo::fixed(0),
            analogue_gain: ControlInfo::new(ANALOG_GAIN_MIN, ANALOG_GAIN_MAX, ANALOG_GAIN_DEFAULT),
            digital_gain: ControlInfo::new(DGTL_GAIN_MIN, DGTL_GAIN_MAX, DGTL_GAIN_DEFAULT),
            exposure: ControlInfo::new(EXPOSURE_MIN, exposure_max, exposure_max),
            test_pattern: ControlInfo::new(0, TEST_PATTERN_MENU.len() as i64 - 1, 0),
        };
        controls.update_for_mode(mode);
        controls
    }

    /// Moves the mode-dependent ranges to `mode`.
    pub fn update_for_mode(&mut self, mode: &SupportedMode) {
        let height = i64::from(mode.height);
        let vts_def = i64::from(mode.vts_def);
        self.height = height;

        self.link_freq.value = mode.link_freq_index as i64;
        self.pixel_rate = ControlInfo::fixed(mode.link_freq().pixel_rate);

        self.vblank.modify_range(
            i64::from(mode.vts_min) - height,
            i64::from(VTS_MAX) - height,
            vts_def - height,
        );
        self.vblank.value = vts_def - height;
        self.update_exposure_range();

        self.hblank = ControlInfo::fixed(i64::from(FIXED_PPL) - i64::from(mode.width));
    }

    fn update_exposure_range(&mut self) {
        let max = self.height + self.vblank.value - 8;
        self.exposure.modify_range(self.exposure.min, max, max);
    }

    fn info_mut(&mut self, id: ControlId) -> &mut ControlInfo {
        match id {
            ControlId::LinkFreq => &mut self.link_freq,
            ControlId::PixelRate => &mut self.pixel_rate,
            ControlId::VerticalBlank => &mut self.vblank,
            ControlId::HorizontalBlank => &mut self.hblank,
            ControlId::AnalogueGain => &mut self.analogue_gain,
            ControlId::DigitalGain => &mut self.digital_gain,
            ControlId::Exposure => &mut self.exposure,
            ControlId::TestPattern => &mut self.test_pattern,
        }
    }

    pub fn get(&self, id: ControlId) -> ControlInfo {
        match id {
            ControlId::LinkFreq => self.link_freq,
            ControlId::PixelRate => self.pixel_rate,
            ControlId::VerticalBlank => self.vblank,
            ControlId::HorizontalBlank => self.hblank,
            ControlId::AnalogueGain => self.analogue_gain,
            ControlId::DigitalGain => self.digital_gain,
            ControlId::Exposure => self.exposure,
            ControlId::TestPattern => self.test_pattern,
        }
    }

    pub fn value(&self, id: ControlId) -> i64 {
        self.get(id).value
    }

    /// Stores a new value. Returns whether the exposure value was clamped by a vblank change.
    pub fn set<E>(&mut self, id: ControlId, value: i64) -> Result<bool, Error<E>> {
        let info = self.info_mut(id);
        if info.read_only {
            return Err(Error::ReadOnly);
        }
        if value < info.min || value > info.max {
            return Err(Error::OutOfRange);
        }
        info.value = value;

        if id == ControlId::VerticalBlank {
            let exposure = self.exposure.value;
            self.update_exposure_range();
            return Ok(self.exposure.value != exposure);
        }
        Ok(false)
    }

    /// Frame length in lines.
    pub fn vts(&self) -> u32 {
        (self.height + self.vblank.value) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::SUPPORTED_MODES;

    #[test]
    fn defaults_for_full_resolution() {
        let c = Controls::new(&SUPPORTED_MODES[0]);
        let exposure = c.get(ControlId::Exposure);
        assert_eq!((exposure.min, exposure.max, exposure.value), (4, 0x808 - 8, 0x808 - 8));
        let vblank = c.get(ControlId::VerticalBlank);
        assert_eq!(vblank.min, 0x808 - 1944);
        assert_eq!(vblank.max, 0xffff - 1944);
        assert_eq!(vblank.value, 0x808 - 1944);
        assert_eq!(c.value(ControlId::HorizontalBlank), 2724 - 2592);
        assert_eq!(c.value(ControlId::PixelRate), 168_960_000);
        assert_eq!(c.value(ControlId::AnalogueGain), 128);
        assert_eq!(c.value(ControlId::DigitalGain), 1024);
        assert_eq!(c.value(ControlId::TestPattern), 0);
        assert_eq!(c.vts(), 0x808);
    }

    #[test]
    fn mode_change_moves_ranges() {
        let mut c = Controls::new(&SUPPORTED_MODES[0]);
        c.set::<()>(ControlId::AnalogueGain, 300).unwrap();
        c.update_for_mode(&SUPPORTED_MODES[4]);
        let vblank = c.get(ControlId::VerticalBlank);
        assert_eq!(vblank.min, 1020 - 720);
        assert_eq!(vblank.value, 0x808 - 720);
        assert_eq!(c.value(ControlId::HorizontalBlank), 2724 - 1280);
        assert_eq!(c.get(ControlId::Exposure).max, 0x808 - 8);
        assert_eq!(c.value(ControlId::AnalogueGain), 300);
    }

    #[test]
    fn rejects_read_only_and_out_of_range() {
        let mut c = Controls::new(&SUPPORTED_MODES[0]);
        assert!(matches!(
            c.set::<()>(ControlId::PixelRate, 1),
            Err(Error::ReadOnly)
        ));
        assert!(matches!(
            c.set::<()>(ControlId::HorizontalBlank, 132),
            Err(Error::ReadOnly)
        ));
        assert!(matches!(
            c.set::<()>(ControlId::DigitalGain, 4096),
            Err(Error::OutOfRange)
        ));
        assert!(matches!(
            c.set::<()>(ControlId::Exposure, 3),
            Err(Error::OutOfRange)
        ));
        assert!(matches!(
            c.set::<()>(ControlId::TestPattern, 2),
            Err(Error::OutOfRange)
        ));
        assert_eq!(c.value(ControlId::DigitalGain), 1024);
    }

    #[test]
    fn shrinking_vblank_clamps_exposure() {
        let mut c = Controls::new(&SUPPORTED_MODES[1]);
        assert_eq!(c.value(ControlId::Exposure), 0x808 - 8);
        let clamped = c.set::<()>(ControlId::VerticalBlank, 996 - 972).unwrap();
        assert!(clamped);
        assert_eq!(c.get(ControlId::Exposure).max, 996 - 8);
        assert_eq!(c.value(ControlId::Exposure), 996 - 8);
        assert_eq!(c.vts(), 996);

        let clamped = c.set::<()>(ControlId::VerticalBlank, 2000).unwrap();
        assert!(!clamped);
        assert_eq!(c.get(ControlId::Exposure).max, 972 + 2000 - 8);
    }
}
