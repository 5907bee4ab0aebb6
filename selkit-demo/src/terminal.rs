//! Terminal setup and frame drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use seldom::text::fit_to_width;
use selkit::prelude::*;

use crate::form::Frame;

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message prints
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { stdout })
    }

    /// Draw a whole frame. Lists go last so they cover other fields.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let out = &mut self.stdout;
        queue!(out, Hide, Clear(ClearType::All))?;

        for label in &frame.labels {
            if label.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(
                out,
                MoveTo(label.x, label.y),
                Print(&label.text),
                SetAttribute(Attribute::Reset)
            )?;
        }

        for view in &frame.views {
            draw_trigger(out, &view.trigger)?;
        }
        for view in &frame.views {
            if let Some(list) = &view.list {
                draw_list(out, list)?;
            }
        }

        // Only the focused text field shows a cursor
        if let Some((x, y)) = frame
            .views
            .iter()
            .find_map(|view| view.trigger.cursor_x.map(|x| (x, view.trigger.rect.y)))
        {
            queue!(out, MoveTo(x, y), Show)?;
        }

        out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

fn draw_trigger(out: &mut Stdout, trigger: &TriggerView) -> io::Result<()> {
    let rect = trigger.rect;
    if rect.is_empty() {
        return Ok(());
    }

    // Underlined field background
    queue!(
        out,
        MoveTo(rect.x, rect.y),
        SetAttribute(Attribute::Underlined),
        Print(" ".repeat(rect.width as usize)),
        SetAttribute(Attribute::Reset)
    )?;

    let mut text_x = rect.x;
    for chip in &trigger.chips {
        queue!(
            out,
            MoveTo(chip.rect.x, chip.rect.y),
            SetAttribute(Attribute::Reverse),
            Print(&chip.label),
            Print(selkit::widgets::tag_input::CHIP_CLOSE),
            SetAttribute(Attribute::Reset)
        )?;
        text_x = chip.rect.right().saturating_add(1);
    }

    if trigger.is_placeholder || trigger.disabled {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if trigger.focused && trigger.cursor_x.is_none() {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        MoveTo(text_x, rect.y),
        SetAttribute(Attribute::Underlined),
        Print(&trigger.text),
        SetAttribute(Attribute::Reset)
    )?;

    if let Some(indicator) = trigger.indicator {
        queue!(
            out,
            MoveTo(rect.right().saturating_sub(1), rect.y),
            Print(indicator)
        )?;
    }
    Ok(())
}

fn draw_list(out: &mut Stdout, list: &ListView) -> io::Result<()> {
    for (offset, row) in list.rows.iter().enumerate() {
        let y = list.rect.y + offset as u16;
        if row.highlighted {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        if row.selected {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if row.index.is_none() {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            out,
            MoveTo(list.rect.x, y),
            Print(fit_to_width(&row.label, list.rect.width as usize)),
            SetAttribute(Attribute::Reset)
        )?;
    }
    Ok(())
}
