/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

/// Writes formatted output to a tokio::io::AsyncWrite and flushes it.
/// $writer must be AsyncWrite + Unpin.
#[macro_export]
macro_rules! async_write {
    ($writer:expr, $($arg:tt)*) => {{
        use tokio::io::AsyncWriteExt;
        let formatted = format!($($arg)*);
        match $writer.write_all(formatted.as_bytes()).await {
            Ok(()) => $writer.flush().await,
            Err(e) => Err(e),
        }
    }};
}

/// Like async_write!, with a trailing newline.
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {
        $crate::async_write!($writer, "\n")
    };
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write!($writer, "{formatted}")
    }};
}
