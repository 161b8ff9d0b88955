//! ACPI namespace access: vendor buffer methods and `_DEP` resolution.

use crate::Error;

/// Hardware ID of the camera power-control companion (TPS68470 PMIC or discrete GPIOs).
pub const INT3472_HID: &str = "INT3472";

/// Sensor wiring descriptor method, on the sensor's node.
pub const SSDB_METHOD: &str = "SSDB";
/// Control logic descriptor method, on the INT3472 node.
pub const CLDB_METHOD: &str = "CLDB";
pub const DEP_METHOD: &str = "_DEP";

/// ACPICA status code of a failed evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcpiStatus(pub u32);

/// Result of evaluating a control method. Borrowed from the namespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AcpiObject<'a, H> {
    Integer(u64),
    String(&'a str),
    Buffer(&'a [u8]),
    /// Package of object references, as returned by `_DEP`.
    References(&'a [H]),
}

/// The platform's ACPI namespace together with the bus devices bound to it.
pub trait AcpiNamespace {
    type Handle: Copy + PartialEq;
    /// A device instance on the platform's device model.
    type Device: Copy + PartialEq;

    fn has_method(&self, handle: Self::Handle, method: &str) -> bool;

    /// Evaluates a method taking no arguments.
    fn evaluate(
        &self,
        handle: Self::Handle,
        method: &str,
    ) -> Result<AcpiObject<'_, Self::Handle>, AcpiStatus>;

    /// `_HID` of the node, `None` if the node has no valid hardware id.
    fn hardware_id(&self, handle: Self::Handle) -> Result<Option<&str>, AcpiStatus>;

    /// First bus device accepted by `matches`.
    fn bus_find_device(
        &self,
        matches: &mut dyn FnMut(Self::Device) -> bool,
    ) -> Option<Self::Device>;

    /// Firmware node a device was enumerated from.
    fn fwnode(&self, device: Self::Device) -> Option<Self::Handle>;

    fn acpi_handle(&self, device: Self::Device) -> Option<Self::Handle> {
        self.fwnode(device)
    }

    /// Takes a reference on `device`.
    fn get_device(&mut self, device: Self::Device);

    /// Drops a reference taken with [`Self::get_device`].
    fn put_device(&mut self, device: Self::Device);
}

/// Evaluates a buffer-returning method into `dest`.
///
/// Firmware versions differ in how long the buffer is, so a short buffer is accepted and only
/// its bytes are copied; the tail of `dest` is left untouched. A buffer longer than `dest` is
/// rejected without writing anything. Returns the number of bytes the firmware returned.
pub fn read_blob<A: AcpiNamespace, E>(
    ns: &A,
    handle: A::Handle,
    method: &str,
    dest: &mut [u8],
) -> Result<usize, Error<E>> {
    let obj = ns.evaluate(handle, method).map_err(|_| {
        debug!("{} evaluation failed", method);
        Error::<E>::NotFound
    })?;
    let AcpiObject::Buffer(buf) = obj else {
        error!("{} did not return a buffer", method);
        return Err(Error::Format);
    };
    if buf.len() > dest.len() {
        error!("{} buffer too long: {} > {}", method, buf.len(), dest.len());
        return Err(Error::BufferTooSmall {
            len: buf.len(),
            capacity: dest.len(),
        });
    }
    dest[..buf.len()].copy_from_slice(buf);
    Ok(buf.len())
}

/// A counted reference to the sensor's power-control companion device.
///
/// Several sensors may depend on the same companion, so the reference must be handed back
/// with [`DependentDevice::release`].
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct DependentDevice<D> {
    device: D,
}

impl<D: Copy + PartialEq> DependentDevice<D> {
    pub fn device(&self) -> D {
        self.device
    }

    pub fn release<A: AcpiNamespace<Device = D>>(self, ns: &mut A) {
        ns.put_device(self.device);
    }
}

/// Finds the INT3472 device listed in the sensor's `_DEP` and takes a reference on it.
pub fn resolve_dependent_device<A: AcpiNamespace, E>(
    ns: &mut A,
    sensor: A::Handle,
) -> Result<DependentDevice<A::Device>, Error<E>> {
    if !ns.has_method(sensor, DEP_METHOD) {
        error!("No dependent devices");
        return Err(Error::NoDependency);
    }

    let found = {
        let deps = match ns.evaluate(sensor, DEP_METHOD) {
            Ok(AcpiObject::References(deps)) => deps,
            Ok(_) | Err(_) => {
                error!("Failed to evaluate _DEP");
                return Err(Error::NotFound);
            }
        };

        let mut found = None;
        for &dep in deps {
            let hid = ns.hardware_id(dep).map_err(|_| {
                error!("Error reading _DEP device info");
                Error::<E>::NotFound
            })?;
            if hid != Some(INT3472_HID) {
                continue;
            }
            let device = ns.bus_find_device(&mut |d| ns.fwnode(d) == Some(dep));
            if device.is_some() {
                found = device;
                break;
            }
            debug!("INT3472 entry is not bound to a device, continuing");
        }
        found
    };

    match found {
        Some(device) => {
            ns.get_device(device);
            info!("Dependent device found");
            Ok(DependentDevice { device })
        }
        None => {
            error!("Error getting dependent device");
            Err(Error::NotFound)
        }
    }
}
