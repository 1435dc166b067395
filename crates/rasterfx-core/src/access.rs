/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Access modes attached to a pixel buffer acquisition.

use bitflags::bitflags;

bitflags! {
    /// How a caller intends to use an acquired pixel view.
    ///
    /// A shared view may only be acquired with [`AccessMode::READ`];
    /// requesting write access through a shared view is a buffer
    /// acquisition error.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct AccessMode: u8 {
        const READ  = 0b01;
        const WRITE = 0b10;
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::AccessMode;

    #[test]
    fn read_write_is_union() {
        assert!(AccessMode::READ_WRITE.contains(AccessMode::READ));
        assert!(AccessMode::READ_WRITE.contains(AccessMode::WRITE));
        assert!(!AccessMode::READ.contains(AccessMode::WRITE));
    }
}
