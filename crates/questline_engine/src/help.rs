//! The static command reference shown by HELP.

/// Command reference. Entries marked WIP parse but do nothing yet.
pub const HELP_TEXT: &str = "\
Here are the commands you can use (WIP commands do not yet work fully):
HELP/?         - show this help
DEBUG ROOM     - print info on the current room
DROP/PUT       - put down an object you are carrying
EXITS          - show the names of all exits from the room
GO/MOVE        - go to another room via one of the exits
INVENTORY/I    - list what you are carrying
LOOK           - show the description of the room
QUIT/EXIT      - end the game
TAKE/GET       - pick up an object in the room
TALK/SPEAK     - talk to someone/something in the room [WIP]
USE            - use an object in your inventory [WIP]";
