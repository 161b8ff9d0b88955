use core::fmt;

use arbitrary_int::{u20, u4};
use bitbybit::bitfield;

/// MODE_SELECT register (0x0100)
#[bitfield(u8, default = 0)]
pub struct ModeSelect {
    #[bit(0, rw)]
    pub streaming: bool,
}

/// SOFTWARE_RST register (0x0103)
#[bitfield(u8, default = 0)]
pub struct SoftwareReset {
    #[bit(0, rw)]
    pub reset: bool,
}

/// EXPOSURE registers (0x3500..=0x3502), written as one 24-bit value.
#[bitfield(u32, default = 0)]
pub struct Exposure {
    #[bits(0..=3, rw)]
    pub fraction: u4,
    /// Exposure time in lines
    #[bits(4..=23, rw)]
    pub lines: u20,
}

/// Test pattern register (0x4303). Other bits belong to the ISP and are preserved.
#[bitfield(u8, default = 0)]
pub struct TestPattern {
    #[bit(3, rw)]
    pub enable: bool,
}

fn le_u16(raw: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([raw[offset], raw[offset + 1]])
}

fn le_u32(raw: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([raw[offset], raw[offset + 1], raw[offset + 2], raw[offset + 3]])
}

/// Copies `bytes` into a zeroed fixed-size record. Missing trailing bytes stay zero.
fn padded<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut raw = [0; N];
    let len = bytes.len().min(N);
    raw[..len].copy_from_slice(&bytes[..len]);
    raw
}

/// Sensor Subsystem Data Block, returned by the `SSDB` method of the sensor's ACPI node.
///
/// Describes how the module is wired to the CSI-2 receiver. The firmware blob is a packed
/// little-endian record; reserved and must-be-zero bytes are not kept.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ssdb {
    pub version: u8,
    /// CRD board type
    pub sensor_card_sku: u8,
    /// CSI-2 data stream GUID
    pub csi2_data_stream_interface: [u8; 16],
    /// Bus/device/function of the host controller
    pub bdf_value: u16,
    /// Host controller fuses, used to check whether the link is fused out
    pub dphy_link_en_fuses: u32,
    pub lanes_clock_division: u32,
    pub link_used: u8,
    pub lanes_used: u8,
    /// MIPI timing: termen/settle pairs for the clock lane and data lanes 0..=3
    pub csi_rx_dly_cnt: [u32; 10],
    pub max_lane_speed: u32,
    pub sensor_cal_file_idx: u8,
    /// NVM type of the module
    pub rom_type: u8,
    /// VCM type of the module
    pub vcm_type: u8,
    pub platform: u8,
    pub platform_sub: u8,
    pub flash_support: u8,
    pub privacy_led: u8,
    /// Orientation: 0 upright, 1 rotated 180 degrees
    pub degree: u8,
    /// Whether MIPI info is defined in ACPI or left to the sensor driver
    pub mipi_define: u8,
    pub mclk_speed: u32,
    /// PMIC device node used for the sensor
    pub control_logic_id: u8,
    pub mipi_data_format: u8,
    pub silicon_version: u8,
    pub customer_id: u8,
    pub mclk_port: u8,
}

impl Ssdb {
    /// Size of the record including its trailing padding.
    pub const SIZE: usize = 108;

    /// Decodes a firmware buffer. Buffers shorter than [`Self::SIZE`] decode with the
    /// missing fields zeroed.
    pub fn decode(bytes: &[u8]) -> Self {
        let raw: [u8; Self::SIZE] = padded(bytes);
        let mut csi2_data_stream_interface = [0; 16];
        csi2_data_stream_interface.copy_from_slice(&raw[2..18]);
        let mut csi_rx_dly_cnt = [0; 10];
        for (i, v) in csi_rx_dly_cnt.iter_mut().enumerate() {
            *v = le_u32(&raw, 30 + i * 4);
        }
        Self {
            version: raw[0],
            sensor_card_sku: raw[1],
            csi2_data_stream_interface,
            bdf_value: le_u16(&raw, 18),
            dphy_link_en_fuses: le_u32(&raw, 20),
            lanes_clock_division: le_u32(&raw, 24),
            link_used: raw[28],
            lanes_used: raw[29],
            csi_rx_dly_cnt,
            max_lane_speed: le_u32(&raw, 70),
            sensor_cal_file_idx: raw[74],
            rom_type: raw[78],
            vcm_type: raw[79],
            platform: raw[80],
            platform_sub: raw[81],
            flash_support: raw[82],
            privacy_led: raw[83],
            degree: raw[84],
            mipi_define: raw[85],
            mclk_speed: le_u32(&raw, 86),
            control_logic_id: raw[90],
            mipi_data_format: raw[91],
            silicon_version: raw[92],
            customer_id: raw[93],
            mclk_port: raw[94],
        }
    }

    /// Mounting rotation in degrees.
    pub fn rotation(&self) -> u16 {
        if self.degree == 1 {
            180
        } else {
            0
        }
    }

    /// Logs the raw blob and the fields that matter for bring-up.
    pub fn dump(&self, raw: &[u8]) {
        info!("SSDB ({} bytes)", raw.len());
        log_hex(raw);
        info!("link_used: {}", self.link_used);
        info!("lanes_used: {}", self.lanes_used);
        info!("vcm_type: {}", self.vcm_type);
        info!("flash_support: {}", self.flash_support);
        info!("degree: {}", self.degree);
        info!("mclk_port: {}", self.mclk_port);
        info!("mclk_speed: {}", self.mclk_speed);
        info!("lanes_clock_division: {}", self.lanes_clock_division);
        info!("rom_type: {}", self.rom_type);
        info!("privacy_led: {}", self.privacy_led);
        info!("mipi_define: {}", self.mipi_define);
        info!("control_logic_id: {}", self.control_logic_id);
    }
}

/// Kind of power control logic backing a sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlLogicType {
    Unknown,
    /// Discrete GPIOs (CRD-D)
    Discrete,
    /// TPS68470 PMIC
    Tps68470,
    /// uP6641 PMIC
    Up6641,
    Other(u8),
}

impl From<u8> for ControlLogicType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Discrete,
            2 => Self::Tps68470,
            3 => Self::Up6641,
            other => Self::Other(other),
        }
    }
}

impl From<ControlLogicType> for u8 {
    fn from(value: ControlLogicType) -> Self {
        match value {
            ControlLogicType::Unknown => 0,
            ControlLogicType::Discrete => 1,
            ControlLogicType::Tps68470 => 2,
            ControlLogicType::Up6641 => 3,
            ControlLogicType::Other(other) => other,
        }
    }
}

/// Control Logic Data Block, returned by the `CLDB` method of the INT3472 node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cldb {
    pub version: u8,
    pub control_logic_type: ControlLogicType,
    /// PMIC device node used for the sensor
    pub control_logic_id: u8,
    pub sensor_card_sku: u8,
}

impl Default for Cldb {
    fn default() -> Self {
        Self {
            version: 0,
            control_logic_type: ControlLogicType::Unknown,
            control_logic_id: 0,
            sensor_card_sku: 0,
        }
    }
}

impl Cldb {
    pub const SIZE: usize = 32;

    pub fn decode(bytes: &[u8]) -> Self {
        let raw: [u8; Self::SIZE] = padded(bytes);
        Self {
            version: raw[0],
            control_logic_type: raw[1].into(),
            control_logic_id: raw[2],
            sensor_card_sku: raw[3],
        }
    }

    pub fn dump(&self, raw: &[u8]) {
        info!("CLDB ({} bytes)", raw.len());
        log_hex(raw);
        info!("version: {}", self.version);
        info!("control_logic_type: {}", u8::from(self.control_logic_type));
        info!("control_logic_id: {}", self.control_logic_id);
        info!("sensor_card_sku: {}", self.sensor_card_sku);
    }
}

/// Hex dump, 16 bytes per row, each row prefixed with its offset.
pub(crate) struct HexDump<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.bytes.chunks(16).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:08x}:", self.offset + i * 16)?;
            for b in row {
                write!(f, " {:02x}", b)?;
            }
        }
        Ok(())
    }
}

fn log_hex(raw: &[u8]) {
    use core::fmt::Write;

    for (i, row) in raw.chunks(16).enumerate() {
        let mut line = heapless::String::<64>::new();
        let dump = HexDump {
            offset: i * 16,
            bytes: row,
        };
        if write!(line, "{}", dump).is_ok() {
            info!("{}", line.as_str());
        }
    }
}
