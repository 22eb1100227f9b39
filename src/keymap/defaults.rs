//! Default key bindings

use super::{KeyMap, MapContext};
use crate::action::{Action, HostCommand, ModeSwitch};
use crate::key::Key;
use crate::movement::{FindKind, Motion};
use crate::operator::Operator;

/// The motions shared by every context.
const MOTIONS: &[(char, Motion)] = &[
    ('h', Motion::Left),
    ('l', Motion::Right),
    ('j', Motion::Down),
    ('k', Motion::Up),
    ('0', Motion::LineStart),
    ('^', Motion::FirstNonBlank),
    ('$', Motion::LineEnd),
    ('w', Motion::WordForward { big: false }),
    ('W', Motion::WordForward { big: true }),
    ('b', Motion::WordBack { big: false }),
    ('B', Motion::WordBack { big: true }),
    ('e', Motion::WordEnd { big: false }),
    ('E', Motion::WordEnd { big: true }),
];

const FINDS: &[(char, FindKind)] = &[
    ('f', FindKind::Find),
    ('t', FindKind::Till),
    ('F', FindKind::FindBack),
    ('T', FindKind::TillBack),
];

const OPERATORS: &[(char, Operator)] = &[
    ('d', Operator::Delete),
    ('c', Operator::Change),
    ('y', Operator::Yank),
    ('>', Operator::Indent),
    ('<', Operator::Outdent),
];

fn register_shared(map: &mut KeyMap, context: MapContext) {
    for (ch, motion) in MOTIONS {
        map.register(context, vec![Key::Char(*ch)], Action::Motion(*motion));
    }
    for (ch, kind) in FINDS {
        map.register(context, vec![Key::Char(*ch)], Action::AwaitChar(*kind));
    }
    map.register(
        context,
        vec![Key::Char('g'), Key::Char('g')],
        Action::Motion(Motion::FileStart),
    );
    map.register(context, vec![Key::Char('G')], Action::GotoOrFileEnd);
    for (ch, op) in OPERATORS {
        map.register(context, vec![Key::Char(*ch)], Action::Operator(*op));
    }
}

fn register_scrolling(map: &mut KeyMap, context: MapContext) {
    let scrolls: &[(Key, &str)] = &[
        (Key::Ctrl('d'), "scroll.halfPageDown"),
        (Key::Ctrl('u'), "scroll.halfPageUp"),
        (Key::Ctrl('f'), "scroll.pageDown"),
        (Key::Ctrl('b'), "scroll.pageUp"),
    ];
    for (key, command) in scrolls {
        map.register(context, vec![*key], Action::Host(HostCommand::new(*command)));
    }
    let z_commands: &[(char, &str)] = &[
        ('z', "scroll.cursorToCenter"),
        ('t', "scroll.cursorToTop"),
        ('b', "scroll.cursorToBottom"),
    ];
    for (second, command) in z_commands {
        map.register(
            context,
            vec![Key::Char('z'), Key::Char(*second)],
            Action::Host(HostCommand::new(*command)),
        );
    }
}

/// Build the stock vim-flavored keymap.
#[must_use]
pub fn default_keymap() -> KeyMap {
    let mut map = KeyMap::new();

    register_shared(&mut map, MapContext::Normal);
    register_shared(&mut map, MapContext::OperatorPending);
    register_shared(&mut map, MapContext::Visual);

    register_scrolling(&mut map, MapContext::Normal);
    register_scrolling(&mut map, MapContext::Visual);

    let switches: &[(char, ModeSwitch)] = &[
        ('i', ModeSwitch::Insert),
        ('a', ModeSwitch::InsertAfter),
        ('I', ModeSwitch::InsertLineStart),
        ('A', ModeSwitch::InsertLineEnd),
        ('o', ModeSwitch::OpenBelow),
        ('O', ModeSwitch::OpenAbove),
        ('v', ModeSwitch::Visual),
        ('V', ModeSwitch::VisualLine),
    ];
    for (ch, switch) in switches {
        map.register(
            MapContext::Normal,
            vec![Key::Char(*ch)],
            Action::Switch(*switch),
        );
    }
    // In visual mode `v`/`V` toggle or convert the selection.
    map.register(
        MapContext::Visual,
        vec![Key::Char('v')],
        Action::Switch(ModeSwitch::Visual),
    );
    map.register(
        MapContext::Visual,
        vec![Key::Char('V')],
        Action::Switch(ModeSwitch::VisualLine),
    );

    map.register(
        MapContext::Normal,
        vec![Key::Char('u')],
        Action::Host(HostCommand::new("undo")),
    );
    map.register(
        MapContext::Normal,
        vec![Key::Ctrl('r')],
        Action::Host(HostCommand::new("redo")),
    );
    map.register(
        MapContext::Normal,
        vec![Key::Char('z'), Key::Char('a')],
        Action::Host(HostCommand::new("fold.toggle")),
    );

    map
}
