//! Thin owned wrapper over `AXUIElement`.

use anyhow::{bail, Result};
use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::string::CFString;
use core_foundation_sys::array::{CFArrayGetCount, CFArrayGetValueAtIndex, CFArrayRef};
use core_foundation_sys::base::{CFGetTypeID, CFRelease, CFRetain, CFTypeID, CFTypeRef};
use core_foundation_sys::string::CFStringRef;
use core_graphics::geometry::{CGPoint, CGSize};
use std::ffi::c_void;
use std::ptr;

type AXUIElementRef = CFTypeRef;
type AXError = i32;

const K_AX_ERROR_SUCCESS: AXError = 0;
const K_AX_VALUE_TYPE_CG_POINT: u32 = 1;
const K_AX_VALUE_TYPE_CG_SIZE: u32 = 2;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXUIElementCreateApplication(pid: i32) -> AXUIElementRef;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;
    fn AXUIElementPerformAction(element: AXUIElementRef, action: CFStringRef) -> AXError;
    fn AXUIElementGetPid(element: AXUIElementRef, pid: *mut i32) -> AXError;
    fn AXUIElementGetTypeID() -> CFTypeID;
    fn AXValueCreate(value_type: u32, value: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(value: CFTypeRef, value_type: u32, value_ptr: *mut c_void) -> bool;
    fn _AXUIElementGetWindow(element: AXUIElementRef, window_id: *mut u32) -> AXError;
}

pub fn is_process_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Retained accessibility element, released on drop.
pub struct AxElement(AXUIElementRef);

impl AxElement {
    fn from_create_rule(element: AXUIElementRef) -> Option<Self> {
        (!element.is_null()).then(|| Self(element))
    }

    pub fn application(pid: i32) -> Option<Self> {
        Self::from_create_rule(unsafe { AXUIElementCreateApplication(pid) })
    }

    pub fn system_wide() -> Option<Self> {
        Self::from_create_rule(unsafe { AXUIElementCreateSystemWide() })
    }

    pub fn pid(&self) -> Option<i32> {
        let mut pid = 0;
        let err = unsafe { AXUIElementGetPid(self.0, &mut pid) };
        (err == K_AX_ERROR_SUCCESS).then_some(pid)
    }

    pub fn window_id(&self) -> Option<u32> {
        let mut window_id = 0;
        let err = unsafe { _AXUIElementGetWindow(self.0, &mut window_id) };
        (err == K_AX_ERROR_SUCCESS && window_id != 0).then_some(window_id)
    }

    /// Copied attribute value; the caller owns the returned reference.
    fn copy_attribute(&self, name: &str) -> Option<CFTypeRef> {
        let attribute = CFString::new(name);
        let mut value: CFTypeRef = ptr::null();
        let err = unsafe {
            AXUIElementCopyAttributeValue(self.0, attribute.as_concrete_TypeRef(), &mut value)
        };
        if err == K_AX_ERROR_SUCCESS && !value.is_null() {
            Some(value)
        } else {
            None
        }
    }

    /// Copied attribute value, released unless it has the expected type.
    fn typed_attribute(&self, name: &str, type_id: CFTypeID) -> Option<CFTypeRef> {
        let value = self.copy_attribute(name)?;
        if unsafe { CFGetTypeID(value) } == type_id {
            Some(value)
        } else {
            unsafe { CFRelease(value) };
            None
        }
    }

    pub fn string_attribute(&self, name: &str) -> Option<String> {
        let value = self.typed_attribute(name, CFString::type_id())?;
        let string = unsafe { CFString::wrap_under_create_rule(value as CFStringRef) };
        Some(string.to_string())
    }

    pub fn bool_attribute(&self, name: &str) -> Option<bool> {
        let value = self.typed_attribute(name, CFBoolean::type_id())?;
        let boolean = unsafe { CFBoolean::wrap_under_create_rule(value as _) };
        Some(boolean.into())
    }

    pub fn element_attribute(&self, name: &str) -> Option<AxElement> {
        let value = self.typed_attribute(name, unsafe { AXUIElementGetTypeID() })?;
        Some(AxElement(value))
    }

    pub fn windows(&self) -> Vec<AxElement> {
        let Some(array) = self.copy_attribute("AXWindows") else {
            return Vec::new();
        };

        let ax_type = unsafe { AXUIElementGetTypeID() };
        let count = unsafe { CFArrayGetCount(array as CFArrayRef) };
        let mut windows = Vec::with_capacity(count.max(0) as usize);

        for i in 0..count {
            let item = unsafe { CFArrayGetValueAtIndex(array as CFArrayRef, i) };
            if !item.is_null() && unsafe { CFGetTypeID(item) } == ax_type {
                unsafe { CFRetain(item) };
                windows.push(AxElement(item));
            }
        }

        unsafe { CFRelease(array) };
        windows
    }

    pub fn position(&self) -> Option<CGPoint> {
        let mut point = CGPoint::new(0.0, 0.0);
        self.ax_value(
            "AXPosition",
            K_AX_VALUE_TYPE_CG_POINT,
            &mut point as *mut CGPoint as *mut c_void,
        )
        .then_some(point)
    }

    pub fn size(&self) -> Option<CGSize> {
        let mut size = CGSize::new(0.0, 0.0);
        self.ax_value(
            "AXSize",
            K_AX_VALUE_TYPE_CG_SIZE,
            &mut size as *mut CGSize as *mut c_void,
        )
        .then_some(size)
    }

    fn ax_value(&self, name: &str, value_type: u32, out: *mut c_void) -> bool {
        let Some(value) = self.copy_attribute(name) else {
            return false;
        };
        let ok = unsafe { AXValueGetValue(value, value_type, out) };
        unsafe { CFRelease(value) };
        ok
    }

    pub fn set_position(&self, x: f64, y: f64) -> Result<()> {
        let point = CGPoint::new(x, y);
        self.set_ax_value(
            "AXPosition",
            K_AX_VALUE_TYPE_CG_POINT,
            &point as *const CGPoint as *const c_void,
        )
    }

    pub fn set_size(&self, width: f64, height: f64) -> Result<()> {
        let size = CGSize::new(width, height);
        self.set_ax_value(
            "AXSize",
            K_AX_VALUE_TYPE_CG_SIZE,
            &size as *const CGSize as *const c_void,
        )
    }

    fn set_ax_value(&self, name: &str, value_type: u32, value: *const c_void) -> Result<()> {
        let value = unsafe { AXValueCreate(value_type, value) };
        if value.is_null() {
            bail!("AXValueCreate failed for {}", name);
        }
        let result = self.set_attribute(name, value);
        unsafe { CFRelease(value) };
        result
    }

    pub fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        let boolean = if value {
            CFBoolean::true_value()
        } else {
            CFBoolean::false_value()
        };
        self.set_attribute(name, boolean.as_CFTypeRef())
    }

    fn set_attribute(&self, name: &str, value: CFTypeRef) -> Result<()> {
        let attribute = CFString::new(name);
        let err =
            unsafe { AXUIElementSetAttributeValue(self.0, attribute.as_concrete_TypeRef(), value) };
        if err != K_AX_ERROR_SUCCESS {
            bail!("Setting {} failed with AXError {}", name, err);
        }
        Ok(())
    }

    pub fn perform(&self, action: &str) -> Result<()> {
        let action_name = CFString::new(action);
        let err =
            unsafe { AXUIElementPerformAction(self.0, action_name.as_concrete_TypeRef()) };
        if err != K_AX_ERROR_SUCCESS {
            bail!("{} failed with AXError {}", action, err);
        }
        Ok(())
    }
}

impl Drop for AxElement {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0) };
    }
}
